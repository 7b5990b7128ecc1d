use clap::Parser;
use log::info;

use cp_ops::cp_model::CpModel;
use cp_ops::domain::Domain;
use cp_ops::encoding::StringEncoding;
use cp_ops::model::{Constraint, Model, Relation};
use cp_ops::ops::Ops;
use cp_ops::reference::Var;
use cp_ops::value::Value;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of tasks.
    #[arg(value_name = "INT", default_value = "4")]
    tasks: usize,

    /// Number of hosts.
    #[clap(long, value_name = "INT", default_value = "3")]
    hosts: i64,

    /// Maximum number of tasks per host.
    #[clap(long, value_name = "INT", default_value = "2")]
    capacity: i64,

    /// Count all placements instead of printing one.
    #[clap(long)]
    count: bool,
}

fn validate(args: &Cli) -> color_eyre::Result<()> {
    if args.hosts < 1 {
        return Err(color_eyre::eyre::eyre!("Invalid number of hosts: {}", args.hosts));
    }
    if args.capacity < 0 {
        return Err(color_eyre::eyre::eyre!("Invalid capacity: {}", args.capacity));
    }
    Ok(())
}

/// Posts `lit == 1`.
fn require(model: &mut CpModel, ops: &Ops, value: Value) {
    let lit = ops.literal(value);
    model.add(Constraint::compare(lit, Relation::Eq, 1));
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);
    validate(&args)?;

    let mut model = CpModel::new();
    let ops = Ops::new(&mut model);

    // Placement problem:
    // - every task runs on one host
    // - every host is either "web" or "db"
    // - task 0 needs a "db" host
    // - tasks 0 and 1 never share a host
    // - no host runs more than `capacity` tasks
    // - at least one host is "web"
    let roles = Domain::from_values(["web", "db"].map(|r| ops.encoder().to_integer(r)));
    let hosts: Vec<Var> = (0..args.hosts)
        .map(|h| model.new_var_with_domain(roles.clone(), &format!("role{}", h)))
        .collect();
    let tasks: Vec<Var> = (0..args.tasks)
        .map(|t| model.new_int_var(0, args.hosts - 1, &format!("task{}", t)))
        .collect();

    if let Some(&first) = tasks.first() {
        for (h, &role) in hosts.iter().enumerate() {
            let on_host = ops.eq(&mut model, first, h as i64);
            let off_host = ops.not(&mut model, on_host);
            let is_db = ops.eq(&mut model, role, "db");
            let ok = ops.or(&mut model, off_host, is_db);
            require(&mut model, &ops, ok);
        }
    }

    if let [a, b, ..] = tasks[..] {
        let apart = ops.ne(&mut model, a, b);
        require(&mut model, &ops, apart);
    }

    for h in 0..args.hosts {
        let on_host: Vec<Value> = tasks.iter().map(|&t| ops.eq(&mut model, t, h)).collect();
        let load = ops.sum(&mut model, on_host);
        let fits = ops.leq(&mut model, load, args.capacity);
        require(&mut model, &ops, fits);
    }

    let web: Vec<Var> = hosts
        .iter()
        .map(|&role| {
            let is_web = ops.eq(&mut model, role, "web");
            ops.literal(is_web)
        })
        .collect();
    let any_web = ops.exists(&mut model, &web);
    require(&mut model, &ops, Value::Var(any_web));

    info!("model = {:?}", model);
    println!("search space: {}", model.search_space());

    if args.count {
        println!("placements: {}", model.solution_count());
    } else {
        match model.one_solution() {
            Some(solution) => {
                for (h, &role) in hosts.iter().enumerate() {
                    let name = ops.encoder().to_str(solution.value(role));
                    println!("host {} is {}", h, name.as_deref().unwrap_or("?"));
                }
                for (t, &task) in tasks.iter().enumerate() {
                    println!("task {} runs on host {}", t, solution.value(task));
                }
            }
            None => println!("no placement"),
        }
    }

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let args = Cli::parse_from(["placement", "4"]);
        assert!(validate(&args).is_ok());

        let args = Cli::parse_from(["placement", "4", "--hosts", "0"]);
        let err = validate(&args).unwrap_err();
        assert_eq!(err.to_string(), "Invalid number of hosts: 0");

        let args = Cli::parse_from(["placement", "4", "--capacity=-1"]);
        assert!(validate(&args).is_err());
    }
}
