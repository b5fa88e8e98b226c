use argh::FromArgs;
use leafscan::{
    Classifier, ClientConfig, DropAction, DropEvent, DropZone, HttpClassifier, SelectedFile,
    UploadController, UploadOutcome,
};
use std::{path::PathBuf, time::Duration};

mod terminal;

// defaults for the client
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 8000;

#[derive(FromArgs)]
/// Leafscan client for identifying plants in images
struct ClientArgs {
    /// the host to connect to
    #[argh(option, short = 'h', default = "DEFAULT_HOST.to_string()")]
    host: String,

    /// the port to connect to
    #[argh(option, short = 'p', default = "DEFAULT_PORT")]
    port: u16,

    /// request timeout in seconds, none by default
    #[argh(option, short = 't')]
    timeout: Option<u64>,

    /// command to execute: "classify" or "raw"
    #[argh(subcommand)]
    command: ClientCommands,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum ClientCommands {
    Classify(ClassifyCommand),
    Raw(RawCommand),
}

#[derive(FromArgs)]
/// Upload an image and render the identification
#[argh(subcommand, name = "classify")]
struct ClassifyCommand {
    /// the path to the image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// also print the intermediate placeholder states
    #[argh(switch, short = 'v')]
    verbose: bool,
}

#[derive(FromArgs)]
/// Upload an image and print the raw JSON response
#[argh(subcommand, name = "raw")]
struct RawCommand {
    /// the path to the image
    #[argh(option, short = 'i')]
    image_path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: ClientArgs = argh::from_env();

    let config = ClientConfig {
        timeout: args.timeout.map(Duration::from_secs),
        ..ClientConfig::from_host(&args.host, args.port)
    };
    let classifier = HttpClassifier::new(config)?;

    match args.command {
        ClientCommands::Classify(command) => {
            let file = SelectedFile::from_path(&command.image_path).await?;

            // the file goes through the drop target just like a dropped file
            let mut zone = DropZone::new();
            let DropAction::Submit(files) = zone.handle(DropEvent::Drop(vec![file])) else {
                return Ok(());
            };

            let controller =
                UploadController::new(classifier, terminal::TerminalDisplay::new(command.verbose));
            match controller.upload(&files).await {
                None => println!("{} is not an image", command.image_path.display()),
                Some(UploadOutcome::Failed(err)) => log::warn!("Upload failed: {err}"),
                Some(_) => {}
            }
        }
        ClientCommands::Raw(command) => {
            let file = SelectedFile::from_path(&command.image_path).await?;
            let result = classifier.classify(&file).await?;
            println!("Result: {}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
