use std::{env, process};

use anyhow::{bail, Context, Result};
use log::info;

use autotrain::{
    client::get_user_token,
    params::catalog,
    tasks::get_task,
    ui::{guarded, TerminalNotifier, CYAN_TAG, GREEN_TAG, RESET_TAG},
    ApiClient, Config, Task, TrainingRequest,
};

const USAGE: &str = "\
Usage: autotrain <command> [args]

Commands:
  params <task> <param_choice> <model_choice>   Print the configurable fields as JSON
  fields                                         Print every registered field descriptor
  cost <username> <task> <num_samples> <num_models>
                                                 Ask the backend for a cost quote
  whoami                                         Show the hub user owning the cached token
  task <id>                                      Print the task registered under an id
  tasks                                          List all tasks and their ids";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let Some(command) = args.first() else {
        bail!("{USAGE}");
    };

    match (command.as_str(), &args[1..]) {
        ("params", [task, param_choice, model_choice]) => {
            let request = TrainingRequest::new(task, param_choice, model_choice)?;
            let fields = request.fields()?;
            println!("{}", serde_json::to_string_pretty(&fields)?);
        }
        ("fields", []) => {
            let all: serde_json::Map<_, _> = catalog::all()
                .into_iter()
                .map(|(name, field)| {
                    Ok::<_, anyhow::Error>((name.to_string(), serde_json::to_value(field)?))
                })
                .collect::<Result<_>>()?;
            println!("{}", serde_json::to_string_pretty(&all)?);
        }
        ("cost", [username, task, num_samples, num_models]) => {
            let num_samples: u64 = num_samples
                .parse()
                .with_context(|| format!("num_samples must be a number, got {num_samples:?}"))?;
            let num_models: u32 = num_models
                .parse()
                .with_context(|| format!("num_models must be a number, got {num_models:?}"))?;
            let token = cached_token()?;
            let client = ApiClient::new(Config::from_env())?;

            let price = guarded("get_project_cost", &mut TerminalNotifier::stderr(), || {
                client.get_project_cost(username, &token, task, num_samples, num_models)
            });
            match price {
                Some(price) => println!("{GREEN_TAG}Estimated cost: ${price:.2}{RESET_TAG}"),
                None => process::exit(1),
            }
        }
        ("whoami", []) => {
            let token = cached_token()?;
            let client = ApiClient::new(Config::from_env())?;
            let identity = client.user_authentication(&token)?;
            info!("authenticated as {}", identity.name);
            println!("{CYAN_TAG}{}{RESET_TAG}", identity.name);
            for org in &identity.orgs {
                println!("  {}", org.name);
            }
        }
        ("task", [id]) => {
            let id: i64 = id
                .parse()
                .with_context(|| format!("task id must be an integer, got {id:?}"))?;
            println!("{}", get_task(id));
        }
        ("tasks", []) => {
            for task in Task::ALL {
                println!("{:>3}  {task}", task.id());
            }
        }
        _ => bail!("{USAGE}"),
    }

    Ok(())
}

fn cached_token() -> Result<String> {
    get_user_token()?.context("no hub token found, set HF_TOKEN or log in with the hub CLI")
}
