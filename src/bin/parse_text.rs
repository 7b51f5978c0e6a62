use clap::Parser;
use idcard_ocr::extractor;
use idcard_ocr::utils::logger;

#[derive(Parser)]
#[command(name = "parse-text")]
#[command(about = "Parse card fields from saved OCR text without calling the Vision API")]
struct Args {
    /// Path to a file holding raw OCR text
    #[arg(short, long)]
    input: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Reading OCR text from: {}", args.input);

    let text = match std::fs::read_to_string(&args.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("❌ Failed to read '{}': {}", args.input, e);
            eprintln!("💡 Pass a UTF-8 text file holding raw OCR output");
            std::process::exit(1);
        }
    };

    let record = extractor::extract(&text);

    tracing::info!(
        "✅ Extraction complete: {}/7 fields populated",
        record.populated_fields()
    );

    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
