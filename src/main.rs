use std::path::PathBuf;

use clap::Parser;

use shapescope::ShapeCategory;

#[derive(Parser)]
#[command(name = "shapescope")]
#[command(about = "Detect and classify geometric shapes in images")]
struct Cli {
    /// Image to analyze headlessly; omit to open the picker window
    #[arg(value_name = "IMAGE")]
    image_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    match args.image_path {
        Some(path) => {
            let analysis = shapescope::detection::analyze_file(&path)?;

            println!("Shapes detected:");
            for category in ShapeCategory::ALL {
                println!("  {}: {}", category.label(), analysis.counts.get(category));
            }
            println!("  Total contours: {}", analysis.counts.total());
            Ok(())
        }
        None => {
            #[cfg(feature = "gui")]
            {
                shapescope::gui::run()?;
                Ok(())
            }
            #[cfg(not(feature = "gui"))]
            {
                anyhow::bail!("built without the gui feature; pass an image path instead")
            }
        }
    }
}
