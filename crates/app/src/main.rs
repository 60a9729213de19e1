//! Entry point for Oxygen Run.
//! Logging + CLI flags, then hand off to the platform loop.

use anyhow::{Context, Result};
use corelib::config::WorldConfig;

const DEFAULT_SIZE: (u32, u32) = (640, 480);

/// Everything the command line can change.
#[derive(Debug)]
struct CliArgs {
    backends: wgpu::Backends,
    show_fps: bool,
    width: u32,
    height: u32,
    config: WorldConfig,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            show_fps: false,
            width: DEFAULT_SIZE.0,
            height: DEFAULT_SIZE.1,
            config: WorldConfig::default(),
        }
    }
}

fn parse_backend(val: &str) -> wgpu::Backends {
    match val.to_ascii_lowercase().as_str() {
        "auto" => wgpu::Backends::all(),
        "vulkan" | "vk" => wgpu::Backends::VULKAN,
        "dx12" | "d3d12" => wgpu::Backends::DX12,
        "metal" | "mtl" => wgpu::Backends::METAL,
        "gl" | "opengl" | "gles" => wgpu::Backends::GL,
        other => {
            log::warn!("Unknown backend '{other}', falling back to auto.");
            wgpu::Backends::all()
        }
    }
}

/// Single pass over the flags; later flags win. Unknown flags are ignored.
///
/// `--gpu-backend=auto|vulkan|dx12|metal|gl`, `--show-fps[=on|off]`,
/// `--size=WxH`, `--width=N`, `--height=N`, `--oxygen=SECONDS`.
fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    for arg in args {
        let (flag, val) = match arg.split_once('=') {
            Some((f, v)) => (f, Some(v)),
            None => (arg.as_str(), None),
        };
        match (flag, val) {
            ("--gpu-backend", Some(v)) => cli.backends = parse_backend(v),
            ("--show-fps", None) => cli.show_fps = true,
            ("--show-fps", Some(v)) => {
                cli.show_fps = matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "on" | "yes");
            }
            ("--size", Some(v)) => {
                let parsed = v
                    .split_once(['x', 'X'])
                    .and_then(|(w, h)| Some((w.parse::<u32>().ok()?, h.parse::<u32>().ok()?)));
                match parsed {
                    Some((w, h)) => (cli.width, cli.height) = (w, h),
                    None => log::warn!("Ignoring malformed --size '{v}'"),
                }
            }
            ("--width", Some(v)) => match v.parse::<u32>() {
                Ok(w) => cli.width = w,
                Err(_) => log::warn!("Ignoring malformed --width '{v}'"),
            },
            ("--height", Some(v)) => match v.parse::<u32>() {
                Ok(h) => cli.height = h,
                Err(_) => log::warn!("Ignoring malformed --height '{v}'"),
            },
            ("--oxygen", Some(v)) => {
                let seconds: f32 = v
                    .parse()
                    .with_context(|| format!("Bad --oxygen value '{v}'"))?;
                cli.config = cli.config.with_oxygen_budget(seconds);
            }
            _ => {}
        }
    }
    cli.width = cli.width.max(1);
    cli.height = cli.height.max(1);
    cli.config.validate()?;
    Ok(cli)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = parse_args(std::env::args().skip(1))?;
    log::info!(
        "Starting Oxygen Run. Backend: {:?}, show_fps={}, window_size={}x{}, oxygen={:.1}s",
        cli.backends,
        cli.show_fps,
        cli.width,
        cli.height,
        cli.config.oxygen_budget
    );

    platform::run_with_renderer(cli.backends, cli.show_fps, cli.width, cli.height, cli.config)?;

    log::info!("Graceful shutdown. Bye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_without_flags() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.backends, wgpu::Backends::all());
        assert!(!cli.show_fps);
        assert_eq!((cli.width, cli.height), DEFAULT_SIZE);
        assert_eq!(cli.config, WorldConfig::default());
    }

    #[test]
    fn reads_every_flag_in_one_pass() {
        let cli = parse(&["--gpu-backend=VK", "--show-fps", "--size=800X600", "--oxygen=30"]).unwrap();
        assert_eq!(cli.backends, wgpu::Backends::VULKAN);
        assert!(cli.show_fps);
        assert_eq!((cli.width, cli.height), (800, 600));
        assert_eq!(cli.config.oxygen_budget, 30.0);
    }

    #[test]
    fn later_flags_win_and_size_is_at_least_one() {
        let cli = parse(&["--size=800x600", "--height=0", "--show-fps=off", "--width=abc"]).unwrap();
        assert_eq!((cli.width, cli.height), (800, 1));
        assert!(!cli.show_fps);
    }

    #[test]
    fn bad_oxygen_is_an_error() {
        assert!(parse(&["--oxygen=lots"]).is_err());
        assert!(parse(&["--oxygen=-1"]).is_err());
    }
}
