use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use fieldobs::validation::{clap_id_validator, clap_label_validator};
use fieldobs::workflow::{Actor, Capability, CapabilitySet, WorkflowAction};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fieldobs")]
#[command(about = "Field observation workflow CLI", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Log filter, e.g. `debug` or `fieldobs=trace` (default: warn, or RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Path to config.toml (default: <config dir>/fieldobs/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the stage number active for a status
    Stage {
        /// Status value as stored, e.g. waiting_data_entry
        status: String,
    },

    /// Show completed and pending stages for a status
    Progress {
        /// Status value as stored, e.g. open
        status: String,
    },

    /// Check whether an actor may edit a stage (exit code 1 when denied)
    CanEdit {
        /// Stage number (1-5). Other numbers are denied
        #[arg(allow_negative_numbers = true)]
        stage: i64,

        /// Status value as stored
        status: String,

        #[command(flatten)]
        actor: ActorArgs,
    },

    /// Print the edit matrix of every status and stage for an actor
    Matrix {
        #[command(flatten)]
        actor: ActorArgs,
    },

    /// Summarize a record file
    Show {
        /// Path to the record JSON file
        record: PathBuf,

        /// Acting user id, to list the stages they may edit
        #[arg(short, long, value_parser = clap_id_validator)]
        user: Option<String>,

        /// Act as administrator
        #[arg(long)]
        admin: bool,
    },

    /// Apply a workflow action and save the record
    Advance {
        /// Path to the record JSON file
        record: PathBuf,

        /// approve, submit-data, request-close, approve-close or reject-close
        action: WorkflowAction,

        /// Acting user id
        #[arg(short, long, value_parser = clap_id_validator)]
        user: Option<String>,

        /// Act as administrator
        #[arg(long)]
        admin: bool,
    },

    /// Render a record to PDF through the document service
    Render {
        /// Path to the record JSON file
        record: PathBuf,

        /// Template id known to the render service
        #[arg(short, long, value_parser = clap_id_validator)]
        template: String,

        /// Where to write the PDF
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Browse a record's photos
    Photos {
        /// Path to the record JSON file
        record: PathBuf,

        /// Photo to start at (0-based)
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },

    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

/// Capabilities of the acting user, given as flags.
#[derive(Args, Debug, Clone, Default)]
pub struct ActorArgs {
    /// The actor created the record
    #[arg(long)]
    pub creator: bool,

    /// The actor is the record's approver
    #[arg(long)]
    pub approver: bool,

    /// The actor is responsible for the record
    #[arg(long)]
    pub responsible: bool,

    /// The actor is an administrator
    #[arg(long)]
    pub admin: bool,

    /// Display label for the actor's role
    #[arg(long, value_parser = clap_label_validator)]
    pub role: Option<String>,
}

impl ActorArgs {
    pub fn to_actor(&self) -> Actor {
        let capabilities: CapabilitySet = [
            (self.creator, Capability::Creator),
            (self.approver, Capability::Approver),
            (self.responsible, Capability::Responsible),
            (self.admin, Capability::Admin),
        ]
        .into_iter()
        .filter_map(|(held, capability)| held.then_some(capability))
        .collect();

        let actor = Actor::new(capabilities);
        match &self.role {
            Some(role) => actor.with_role(role.clone()),
            None => actor,
        }
    }
}
