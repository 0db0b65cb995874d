use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::api_client::{HttpTaskApi, TaskApi};
use crate::model::config::AppConfig;
use crate::model::task::Task;
use crate::ops::board::{Presenter, TaskBoard};
use crate::ops::load::{Credentials, load_tasks};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let Some(cmd) = cli.command else {
        return Err("no command given (run without arguments for the interactive list)".into());
    };

    let api = HttpTaskApi::new(&config.api)?;
    let credentials = Credentials::from(&config.api);
    let tasks = match cmd {
        Commands::List => run_query(&api, &credentials, Query::All)?,
        Commands::Search(args) => run_query(&api, &credentials, Query::Text(&args.query))?,
        Commands::Scan(args) => run_query(&api, &credentials, Query::Scan(&args.payload))?,
    };
    print_tasks(&tasks, json)
}

// ---------------------------------------------------------------------------
// One-shot load
// ---------------------------------------------------------------------------

/// What to do with the loaded list before printing it
#[derive(Debug, Clone, Copy)]
pub enum Query<'a> {
    All,
    Text(&'a str),
    Scan(&'a str),
}

/// Keeps whatever the board rendered last.
#[derive(Debug, Default)]
struct Snapshot {
    tasks: Vec<Task>,
    loading: bool,
}

impl Presenter for Snapshot {
    fn render(&mut self, tasks: &[Task]) {
        self.tasks = tasks.to_vec();
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

/// Run a single load through a [`TaskBoard`] and apply `query` to it, the
/// same path the interactive list takes.
pub fn run_query<A>(
    api: &A,
    credentials: &Credentials,
    query: Query<'_>,
) -> Result<Vec<Task>, Box<dyn std::error::Error>>
where
    A: TaskApi + ?Sized,
{
    let mut board = TaskBoard::new();
    let mut snapshot = Snapshot::default();

    let generation = board.begin_load(&mut snapshot);
    let outcome = load_tasks(api, credentials, |phase| {
        board.advance(generation, phase);
    });
    board.finish_load(generation, outcome, &mut snapshot);
    if let Some(err) = board.last_error() {
        return Err(err.to_string().into());
    }

    match query {
        Query::All => {}
        Query::Text(text) => board.set_query(text, &mut snapshot),
        Query::Scan(payload) => board.apply_scan(payload, &mut snapshot),
    }
    debug_assert!(!snapshot.loading);
    Ok(snapshot.tasks)
}

fn print_tasks(tasks: &[Task], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let items: Vec<TaskJson> = tasks.iter().map(task_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if tasks.is_empty() {
        eprintln!("no tasks");
    } else {
        print!("{}", format_task_table(tasks));
    }
    Ok(())
}
