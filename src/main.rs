use clap::Parser;
use shotfit::output;
use shotfit::resize::{BatchConfig, resize_folder};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shotfit")]
#[command(about = "Batch-resize screenshots to App Store Connect dimensions")]
#[command(long_about = "\
Batch-resize screenshots to App Store Connect dimensions

Every image in the source directory (png, jpg, jpeg, tiff, bmp) is resized
to each of the four 13\" iPad screenshot sizes:

  2064x2752   2752x2064   2048x2732   2732x2048

Resizing uses \"contain\" semantics: the image is scaled to fit entirely
inside the target box without cropping, centered, and the remaining canvas
is padded with solid purple (RGB 143,44,235). Each variant is written as
<name>_<width>x<height>.<ext>, overwriting any existing file.

Files with other extensions are skipped. A file that fails to decode is
reported and skipped; the rest of the batch still runs.")]
#[command(version)]
struct Cli {
    /// Directory containing the source screenshots
    #[arg(long, default_value = "source-images")]
    source: PathBuf,

    /// Directory for resized variants (created if absent)
    #[arg(long, default_value = "resized-images-ipad")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // The fixed App Store table, recognized extensions, and purple canvas
    let config = BatchConfig::default();

    match resize_folder(&cli.source, &cli.output, &config) {
        Ok(_) => println!("{}", output::format_batch_complete()),
        Err(e) => {
            eprintln!("{}", output::format_batch_error(&e));
            std::process::exit(1);
        }
    }
}
