use clap::Parser;
use idcard_ocr::api::server;
use idcard_ocr::utils::{logger, validation::Validate};
use idcard_ocr::{GoogleVisionOcr, OcrEngine, ServiceConfig};

#[derive(Parser)]
#[command(name = "idcard-ocr")]
#[command(about = "Thai ID card OCR service backed by Google Cloud Vision")]
struct Args {
    /// Override the listen port from the environment
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the listen host from the environment
    #[arg(long)]
    host: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting idcard-ocr service");

    // 載入環境設定
    let mut config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 Set the API_KEY environment variable to a Google Cloud Vision key");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(port) = args.port {
        config.port = port;
        tracing::info!("🔧 Port overridden to: {}", port);
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    tracing::info!("📋 Vision endpoint: {}", config.vision_endpoint);

    let host = config.host.clone();
    let port = config.port;

    // 建立 OCR 後端與引擎
    let provider = GoogleVisionOcr::new(config);
    let engine = OcrEngine::new(provider);

    server::start_server(engine, &host, port).await?;

    Ok(())
}
