use anyhow::{Context, Result};
use duoboy::{Console, ConsoleConfig, HostSystem, TestPattern};
use duoboy_common::{handle_error, DISPLAY_HEIGHT, DISPLAY_WIDTH};

const DEFAULT_FRAMES: u32 = 60;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(card_root) = args.next() else {
        eprintln!("Usage: duoboy <card_root> [rom_name] [out_rgb24_path] [frames]");
        std::process::exit(2);
    };
    let rom_name = args.next();
    let out_path = args.next();
    let frames = match args.next().map(|s| s.parse::<u32>()) {
        None => DEFAULT_FRAMES,
        Some(Ok(n)) => n,
        Some(Err(_)) => {
            eprintln!("frames must be a non-negative integer");
            std::process::exit(2);
        }
    };

    let config = ConsoleConfig::builder().card_root(card_root).build();
    if let Err(err) = run(config, rom_name.as_deref(), out_path.as_deref(), frames) {
        // Fatal errors reset the host from inside handle_error.
        handle_error(&mut HostSystem, &err);
        std::process::exit(1);
    }
}

fn run(
    config: ConsoleConfig,
    rom_name: Option<&str>,
    out_path: Option<&str>,
    frames: u32,
) -> Result<()> {
    let mut console = Console::start(config)?;

    let Some(rom_name) = rom_name else {
        list_cartridges(&mut console)?;
        console.shutdown()?;
        return Ok(());
    };

    if console.select_by_name(rom_name).is_err() {
        console.toggle_system()?;
    }
    let path = console.select_by_name(rom_name)?;
    let header = console.load_rom(&path)?;
    let mut source = TestPattern::new(header);

    if console.load_state()? {
        log::info!("Resumed saved state");
    }
    for _ in 0..frames {
        console.run_frame(&mut source)?;
    }
    console.save_cart_ram()?;
    console.save_state()?;

    let panel = console.shutdown()?;
    if let Some(out_path) = out_path {
        let rgb = panel.to_rgb24(false);
        std::fs::write(out_path, &rgb).with_context(|| format!("Failed to write '{out_path}'"))?;
        println!(
            "Wrote {} bytes ({}x{} rgb24) after {} frames to '{}'",
            rgb.len(),
            DISPLAY_WIDTH,
            DISPLAY_HEIGHT,
            frames,
            out_path
        );
    }
    Ok(())
}

fn list_cartridges(console: &mut Console) -> Result<()> {
    for _ in 0..2 {
        let system = console.system();
        println!("{system:?} ({}):", system.config().dir);
        for file in console.list_all()? {
            println!("  {} [{}] (page {})", file.name, file.extension, file.page + 1);
        }
        console.toggle_system()?;
    }
    Ok(())
}
