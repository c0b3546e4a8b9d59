use anyhow::{anyhow, bail, Context};
use avt::{
    AvidWindow, DistanceMode, HexVector, ShellstarConfig, TileCoord, TileGrid,
    TileGridConfig,
};
use config::{Config, File};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
};
use structopt::{clap::AppSettings, StructOpt};

/// Turn paperwork for Attack Vector: Tactical. Vectors are written as
/// space-separated `<magnitude><direction>` terms, e.g. "6F 3E 4+".
#[derive(Debug, StructOpt)]
#[structopt(name = "avt")]
struct Opt {
    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Print a vector in canonical form along with its movement grid
    Movement { vector: String },

    /// Print the distance and AVID window of a vector
    Bearing {
        vector: String,

        /// How to measure horizontal distance: exact (true geometric
        /// distance) or counted (hexes moved on the map)
        #[structopt(long, default_value = "exact")]
        mode: DistanceMode,
    },

    /// Print the bearing from one ship to another, given both of their
    /// vectors
    Crossing { mine: String, other: String },

    /// Normalize an AVID window label, optionally listing every window at a
    /// given offset from it
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Window {
        #[structopt(allow_hyphen_values = true)]
        label: String,

        /// Offset distance (0-6) of the windows to list
        #[structopt(long)]
        ring: Option<u8>,
    },

    /// Print the vector between two tile-map locations, each given as
    /// j,k,u,v,h
    Tile {
        #[structopt(
            long,
            parse(try_from_str = parse_tile_coord),
            allow_hyphen_values = true
        )]
        from: TileCoord,

        #[structopt(
            long,
            parse(try_from_str = parse_tile_coord),
            allow_hyphen_values = true
        )]
        to: TileCoord,

        /// Path to a tile grid config file. Supported formats: JSON, TOML
        #[structopt(short, long)]
        config: Option<PathBuf>,
    },

    /// Simulate a shellstar launch and print the intercept report
    Shellstar {
        /// Vector from the launcher to the target
        #[structopt(long)]
        target: String,

        /// The target's velocity relative to the launcher. Omit for a target
        /// that holds still
        #[structopt(long)]
        crossing: Option<String>,

        /// Closing speed of the projectile, in hexes per turn
        #[structopt(long)]
        muzzle_velocity: f64,

        /// Launch segment (1-8). If omitted, the trace counts elapsed
        /// segments instead of turn:segment
        #[structopt(long)]
        segment: Option<u8>,
    },

    /// Print the effective tile grid config, in TOML format
    ShowConfig {
        /// Path to a tile grid config file. Supported formats: JSON, TOML
        #[structopt(short, long)]
        config: Option<PathBuf>,
    },
}

/// Parse `j,k,u,v,h` into a tile coordinate
fn parse_tile_coord(s: &str) -> anyhow::Result<TileCoord> {
    let parts = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .with_context(|| format!("invalid coordinate {:?}", part))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    match parts[..] {
        [j, k, u, v, h] => Ok(TileCoord::new(j, k, u, v, h)),
        _ => bail!("expected 5 coordinates (j,k,u,v,h), got {}", parts.len()),
    }
}

fn parse_vector(s: &str) -> anyhow::Result<HexVector> {
    s.parse()
        .with_context(|| format!("error parsing vector {:?}", s))
}

fn load_config(
    config_path: Option<&Path>,
) -> anyhow::Result<TileGridConfig> {
    let config_path = match config_path {
        Some(config_path) => config_path,
        None => return Ok(TileGridConfig::default()),
    };

    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    let config = settings.try_into().context("error reading config")?;
    info!("Loaded config from {:?}", config_path);
    Ok(config)
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    match opt.command {
        Command::Movement { vector } => {
            println!("{}", avt::movement_report(&vector)?);
        }
        Command::Bearing { vector, mode } => {
            println!("{}", parse_vector(&vector)?.bearing(mode));
        }
        Command::Crossing { mine, other } => {
            println!("{}", avt::crossing_bearing(&mine, &other)?);
        }
        Command::Window { label, ring } => {
            let window: AvidWindow = label.parse()?;
            match ring {
                Some(distance) => {
                    let windows = window
                        .offset_ring(distance)
                        .with_context(|| {
                            format!("error getting ring around {}", window)
                        })?
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>();
                    println!("{}", windows.join(" "));
                }
                None => {
                    let (direction, ring) = window.to_tuple();
                    println!("{} ({}, {})", window, direction, ring);
                }
            }
        }
        Command::Tile { from, to, config } => {
            let grid = TileGrid::new(load_config(config.as_deref())?)
                .context("invalid tile grid config")?;
            let vector = grid.bearing_vector(from, to);
            println!("{}", vector);
            println!("{}", vector.bearing(DistanceMode::Exact));
        }
        Command::Shellstar {
            target,
            crossing,
            muzzle_velocity,
            segment,
        } => {
            let config = ShellstarConfig {
                muzzle_velocity,
                launch_segment: segment,
            };
            let outcome = avt::shellstar(
                parse_vector(&target)?,
                parse_vector(crossing.as_deref().unwrap_or_default())?,
                &config,
            )
            .context("invalid shellstar parameters")?;
            println!("{}", outcome);
        }
        Command::ShowConfig { config } => {
            let config = load_config(config.as_deref())?;
            print!(
                "{}",
                toml::to_string_pretty(&config)
                    .context("error serializing config")?
            );
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tile_coord() {
        assert_eq!(
            parse_tile_coord("-3,2, 4,9,4").unwrap(),
            TileCoord::new(-3, 2, 4, 9, 4)
        );
        assert!(parse_tile_coord("1,2,3").is_err());
        assert!(parse_tile_coord("1,2,3,4,x").is_err());
    }

    #[test]
    fn test_window_pole_label() {
        let opt = Opt::from_iter_safe(&["avt", "window", "---"]).unwrap();
        match opt.command {
            Command::Window { label, ring } => {
                assert_eq!(label, "---");
                assert_eq!(ring, None);
            }
            command => panic!("unexpected command {:?}", command),
        }
    }
}
