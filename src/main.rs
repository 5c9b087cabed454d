#![doc = include_str!("../README.md")]

use std::fs;

use anyhow;
use clap::{
    Parser, Subcommand
};
use log::info;
use mongodb::{
    bson,
    bson::doc,
    options::{
        ClientOptions,
        ServerApi,
        ServerApiVersion
    },
};
use toml;
use tracing_subscriber::EnvFilter;

mod definition;
mod error;
mod models;

use models::base::BaseDocument;
use models::job::{
    JobDocument,
    JOB_COLLECTION,
};

// CLI
#[derive(Parser, Debug)]
#[command(name = "jobdb: kernel build jobs on MongoDB.")]
#[command(version = "1.0")]
#[command(about = "Record kernel build jobs as documents in a MongoDB \
                   collection, one document per job-kernel pair.",
          long_about = None)
]
struct Cli {
    /// The MongoDB instance to talk to
    #[arg(long, default_value = "mongodb://localhost:27017")]
    db_uri: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Record a new job
    New {
        /// The job definition file on disk
        #[arg(short, long)]
        definition_file: String,
    },

    /// Import a job document from extended JSON text
    Import {
        /// The JSON file on disk
        #[arg(short, long)]
        json_file: String,
    },

    /// Print one job document as extended JSON
    Show {
        /// The job id, of the form `job-kernel`
        #[arg(short, long)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();

    let db_client = mongodb_setup(&cli.db_uri).await?;
    let col_jobs = db_client
        .database("kernel_builds")
        .collection::<JobDocument>(JOB_COLLECTION);

    match &cli.command {
        Commands::New { definition_file } => {
            let job_doc = new_job(definition_file)?;
            info!("Recording job `{}`...", job_doc.name());
            let oid = col_jobs.insert_one(&job_doc)
                .await?
                .inserted_id;
            info!("Job is recorded, id: `{oid:?}`");
        },

        Commands::Import { json_file } => {
            let job_doc = JobDocument::from_json(
                &fs::read_to_string(json_file)?
            )?;
            info!("Importing job `{}`...", job_doc.name());
            let result = col_jobs.replace_one(
                doc! {
                    "_id": job_doc.name()
                },
                &job_doc
            )
            .upsert(true)
            .await?;
            if result.matched_count > 0 {
                info!("An older copy of the job has been replaced.");
            } else {
                info!("Job is imported.");
            }
        },

        Commands::Show { id } => {
            let job_doc = col_jobs.find_one(
                doc! {
                    "_id": id
                }
            )
            .await?
            .ok_or_else(|| anyhow::anyhow!("No such job in db."))?;
            println!("{}",
                serde_json::to_string_pretty(
                    &bson::Bson::Document(job_doc.to_document())
                        .into_relaxed_extjson()
                )?
            );
        },
    }

    Ok(())
}

fn new_job(
    definition_file: &str
) -> anyhow::Result<JobDocument> {
    let definition: definition::Definition = toml::from_str(
        &fs::read_to_string(definition_file)?
    )?;
    let mut job_doc = definition.into_document();
    job_doc.touch();
    Ok(job_doc)
}

async fn mongodb_setup(
    uri: &str,
) -> anyhow::Result<mongodb::Client> {
    info!("Connecting to the MongoDB daemon...");
    let mut client_options = ClientOptions::parse(
        uri
    ).await?;
    let server_api = ServerApi::builder().version(
        ServerApiVersion::V1
    ).build();
    client_options.server_api = Some(server_api);
    let client = mongodb::Client::with_options(client_options)?;
    // Send a ping to confirm a successful connection
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    info!("Successfully connected to the MongoDB instance!");
    Ok(client)
}
