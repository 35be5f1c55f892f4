use anyhow::Result;
use clap::CommandFactory;
use fieldobs::commands::{advance, permissions, photos, render, show, stage};
use fieldobs::config::Config;

use super::types::{Cli, Commands};

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Stage { status } => stage::execute(status),
        Commands::Progress { status } => stage::progress(status),
        Commands::CanEdit {
            stage,
            status,
            actor,
        } => {
            if !permissions::can_edit_cmd(stage, status, &actor.to_actor())? {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Matrix { actor } => permissions::matrix(&actor.to_actor()),
        Commands::Show {
            record,
            user,
            admin,
        } => show::execute(&record, user, admin),
        Commands::Advance {
            record,
            action,
            user,
            admin,
        } => advance::execute(&record, action, user, admin),
        Commands::Render {
            record,
            template,
            output,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            render::execute(&config, &record, template, &output)
        }
        Commands::Photos { record, index } => photos::execute(&record, index),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
