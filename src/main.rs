use anyhow::Result;

fn main() -> Result<()> {
    // Paths and sizes are fixed in `constants`; a missing logo is reported, not fatal
    pwa_icons::generate_icons()
}
