use std::{path::Path, process::ExitCode};

use argh::FromArgs;
use assetgen_core::font::{self, CellSize, FontOptions};
use log::{debug, info};

use crate::{cli::ToolError, image_sheet::ImageSheet};

mod cli;
mod image_sheet;

/// Matches the exit status of an argument error.
const EXIT_USAGE: u8 = 2;

#[derive(FromArgs)]
/// Bitmap font to C converter
#[argh(note = "fontenc 0.1, Copyright (C) 2015 Juan J Martinez <jjm@usebox.net>")]
struct Args {
    /// character width (default: 8)
    #[argh(option, default = "8")]
    width: u32,

    /// character height (default: 8)
    #[argh(option, default = "8")]
    height: u32,

    /// variable name (default: font)
    #[argh(option, default = "font::DEFAULT_NAME.to_string()")]
    name: String,

    /// image to convert
    #[argh(positional)]
    image: String,
}

impl Args {
    fn options(&self) -> FontOptions {
        FontOptions {
            cell: CellSize::new(self.width, self.height),
            name: self.name.clone(),
        }
    }
}

fn main() -> ExitCode {
    cli::init_logging();

    let args: Args = argh::from_env();
    cli::finish(env!("CARGO_BIN_NAME"), convert(&args.image, &args.options()))
}

fn convert(image: &str, options: &FontOptions) -> Result<String, ToolError> {
    let sheet = ImageSheet::open(Path::new(image)).map_err(|err| {
        debug!("{image}: {err}");
        ToolError::new(EXIT_USAGE, "failed to open the image")
    })?;
    let encoded =
        font::encode(&sheet, options).map_err(|err| ToolError::new(EXIT_USAGE, format!("{image:?}: {err}")))?;
    info!("Encoded {} glyphs from {image}", encoded.glyphs().len());
    Ok(encoded.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn write_sheet(tag: &str, width: u32, height: u32) -> String {
        let path = std::env::temp_dir().join(format!("fontenc-{tag}-{}.png", std::process::id()));
        RgbImage::from_fn(width, height, |x, _| if x % 8 == 0 { Rgb([255, 255, 255]) } else { Rgb([0, 0, 0]) })
            .save(&path)
            .unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn default_options() {
        let args = Args::from_args(&["fontenc"], &["sheet.png"]).unwrap();
        assert_eq!((args.width, args.height), (8, 8));
        assert_eq!(args.name, "font");
        assert_eq!(args.image, "sheet.png");
        assert_eq!(args.options(), FontOptions::default());
    }

    #[test]
    fn explicit_options() {
        let args = Args::from_args(
            &["fontenc"],
            &["--width", "6", "--height", "12", "--name", "big", "sheet.png"],
        )
        .unwrap();
        assert_eq!(
            args.options(),
            FontOptions {
                cell: CellSize::new(6, 12),
                name: "big".into(),
            }
        );
    }

    #[test]
    fn image_is_required() {
        assert!(Args::from_args(&["fontenc"], &["--width", "4"]).is_err());
        assert!(Args::from_args(&["fontenc"], &["--width", "x", "sheet.png"]).is_err());
    }

    #[test]
    fn help_carries_version_and_copyright() {
        let early = Args::from_args(&["fontenc"], &["--help"]).err().unwrap();
        assert!(early.status.is_ok());
        assert!(early.output.contains("fontenc 0.1, Copyright (C) 2015 Juan J Martinez"));
        assert!(early.output.contains("character width (default: 8)"));
    }

    #[test]
    fn encodes_png_sheet() {
        let path = write_sheet("ok", 16, 8);
        let text = convert(&path, &FontOptions::default()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(text.starts_with("// 2 characters\nPROGMEM const unsigned char font[] = {\n"));
        assert_eq!(text.matches("\t0b01111111").count(), 16);
    }

    #[test]
    fn size_mismatch_is_usage_error() {
        let path = write_sheet("odd", 12, 8);
        let err = convert(&path, &FontOptions::default()).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("is not a multiple of character 8x8"));
    }

    #[test]
    fn unreadable_image_is_usage_error() {
        let err = convert("/nonexistent/font.png", &FontOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "failed to open the image");
    }

    #[test]
    fn custom_name_and_cell() {
        let path = write_sheet("named", 16, 16);
        let options = FontOptions {
            cell: CellSize::new(4, 16),
            name: "small_font".into(),
        };
        let text = convert(&path, &options).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(text.starts_with("// 4 characters\nPROGMEM const unsigned char small_font[] = {\n"));
        assert!(text.ends_with("};\n // end of small_font\n"));
    }
}
