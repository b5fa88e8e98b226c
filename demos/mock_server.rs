use argh::FromArgs;
use axum::{
    Json, Router,
    extract::Multipart,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use leafscan::{ClassificationResponse, PlantInfo, Prediction};
use serde_json::json;

// defaults for the server
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(FromArgs)]
/// Stand-in for the plant classification endpoint, answering with canned results.
struct MockServerArgs {
    /// the host to run the server on
    #[argh(option, short = 'h', default = "DEFAULT_HOST.to_string()")]
    host: String,

    /// the port to run the server on
    #[argh(option, short = 'p', default = "DEFAULT_PORT")]
    port: u16,
}

async fn post_upload_image(mut multipart: Multipart) -> impl IntoResponse {
    let mut upload = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        match field.bytes().await {
            Ok(bytes) => upload = Some((filename, bytes.len())),
            Err(e) => {
                log::warn!("Failed to read upload: {e}");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "detail": "Could not read file" })),
                );
            }
        }
    }

    let Some((filename, size)) = upload else {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": "Missing file field" })),
        );
    };
    log::info!("Received file: {filename} ({size} bytes)");

    // names starting with "fail" simulate a crashing classifier
    if filename.starts_with("fail") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "Classification error: simulated failure" })),
        );
    }

    let response = canned_response(&filename);
    match serde_json::to_value(&response) {
        Ok(value) => (StatusCode::OK, Json(value)),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": e.to_string() })),
        ),
    }
}

// picks a result from the file name so every branch of the client can be tried
fn canned_response(filename: &str) -> ClassificationResponse {
    let lower = filename.to_ascii_lowercase();
    let (prediction, plant_info) = if lower.contains("aloe") {
        (
            Prediction {
                is_plant: true,
                class_name: "Aloe Vera".to_string(),
                confidence: 0.9342,
            },
            Some(PlantInfo {
                scientific_name: Some("Aloe barbadensis miller".to_string()),
                description: Some("A succulent plant species of the genus Aloe.".to_string()),
                origin: Some("Arabian Peninsula".to_string()),
                uses: Some("Skin care, burns, cosmetics".to_string()),
                family: Some("Asphodelaceae".to_string()),
                image_url: Some("/static/images/aloe.jpg".to_string()),
            }),
        )
    } else if lower.contains("tulsi") {
        (
            Prediction {
                is_plant: true,
                class_name: "Tulsi".to_string(),
                confidence: 0.7815,
            },
            None,
        )
    } else {
        (
            Prediction {
                is_plant: false,
                class_name: "Not a recognized plant".to_string(),
                confidence: 0.2104,
            },
            None,
        )
    };

    ClassificationResponse {
        filename: Some(filename.to_string()),
        prediction,
        plant_info,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: MockServerArgs = argh::from_env();

    // format the host and port
    let addr = format!("{}:{}", args.host, args.port);

    let app = Router::new()
        .route("/", get(|| async { "Leafscan mock classifier" }))
        .route("/upload-image/", post(post_upload_image));

    log::info!("Starting the mock classifier");
    log::info!("Listening on: {}", addr);
    log::info!("Press Ctrl+C to stop the server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
