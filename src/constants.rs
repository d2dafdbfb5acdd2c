//! Fixed defaults for the icon run. The binary takes no flags, so these are the only knobs.

/// Source logo, relative to the project root
pub const LOGO_PATH: &str = "public/logo.png";

/// Directory the icon set is written to
pub const OUTPUT_DIR: &str = "public/icons";

/// Square icon sizes required by the web app manifest, ascending
pub const ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

pub mod manifest {
    /// Root that manifest `src` URLs are resolved against
    pub const PUBLIC_ROOT: &str = "public";

    pub const ICON_MIME: &str = "image/png";
}
