use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;

use ziltrips::cli::{render_plan_text, Cli, PlanReport};
use ziltrips::export::export_pdf;
use ziltrips::logging::init_tracing;
use ziltrips::ui::{self, app::App};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    let log_path = init_tracing(&config.logging);
    tracing::info!(log = ?log_path, "ZilTrips starting");

    let session = cli.build_session(&config)?;

    if let Some(dir) = &cli.export {
        let path = export_pdf(&session.summary(), dir)?;
        println!("{}", path.display());
    }

    if cli.print {
        if cli.json {
            let report = serde_json::to_string_pretty(&PlanReport::new(&session))
                .context("Failed to serialize plan")?;
            println!("{report}");
        } else {
            print!("{}", render_plan_text(&session));
        }
    }

    if cli.is_batch() {
        return Ok(());
    }

    let app = App::new(session, config.export.export_dir());
    ui::run(app).context("Terminal UI failed")?;
    Ok(())
}
