mod error;
mod snapshot;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mizan_base::{
    ALL_ELEMENTS, Element, HOURS_PER_DAY, Planet, Weekday, burj_from_longitude, hour_element,
    hour_ruler, planetary_hour_index, weekday_at_offset,
};
use mizan_rating::{
    AuthenticTimingRating, DignityPowerModel, PowerBreakdown, PowerConfig, RatingRequest,
    build_authentic_rating, classify_strength, element_modifier, get_planetary_recommendations,
    rate_hour_from_transits,
};

use crate::error::CliError;
use crate::snapshot::load_snapshot;

#[derive(Parser)]
#[command(name = "mizan", about = "Planetary hour timing ratings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rate an hour from its ruler's strength
    Rate {
        /// Hour ruler (Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn)
        #[arg(long)]
        planet: Planet,
        /// User's element (fire, water, air, earth)
        #[arg(long)]
        user: Element,
        /// Ruler strength, usually 0-100
        #[arg(long, allow_negative_numbers = true)]
        strength: f64,
        /// Hour element (default: the ruler's element)
        #[arg(long)]
        hour_element: Option<Element>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a strength score
    Strength {
        #[arg(allow_negative_numbers = true)]
        score: f64,
    },
    /// Element compatibility; prints a table of all pairs without arguments
    Compat {
        user: Option<Element>,
        hour: Option<Element>,
    },
    /// Rate an hour using strength from a transit snapshot file
    Transit {
        /// Snapshot JSON file
        #[arg(long)]
        file: PathBuf,
        /// Hour ruler
        #[arg(long)]
        planet: Planet,
        /// User's element
        #[arg(long)]
        user: Element,
        /// Base power (default 50)
        #[arg(long)]
        base: Option<f64>,
        /// Combustion orb in degrees (default 8.5)
        #[arg(long)]
        combust_orb: Option<f64>,
        /// Retrograde penalty (default 10)
        #[arg(long)]
        retrograde_penalty: Option<f64>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Planetary hour rulers for a weekday or an instant
    Hour {
        /// Weekday (e.g. friday, fri)
        #[arg(long, conflicts_with = "jd")]
        weekday: Option<Weekday>,
        /// Hour index 0-23, sunrise first
        #[arg(long, conflicts_with = "jd")]
        index: Option<u8>,
        /// Instant as Julian Date (needs --sunrise, --sunset, --next-sunrise)
        #[arg(long, requires_all = ["sunrise", "sunset", "next_sunrise"])]
        jd: Option<f64>,
        #[arg(long)]
        sunrise: Option<f64>,
        #[arg(long)]
        sunset: Option<f64>,
        #[arg(long)]
        next_sunrise: Option<f64>,
        /// Hours the local zone is ahead of UT, for the day ruler of --jd
        /// (e.g. 7 for UTC+7, -5 for UTC-5)
        #[arg(long, requires = "jd", allow_negative_numbers = true)]
        utc_offset: Option<f64>,
    },
    /// Burj from ecliptic longitude
    Burj {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Recommended activities and dhikr for a planet's hour
    Recommend {
        planet: Planet,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

/// JSON output of `transit`; both fields are null when data is missing.
#[derive(serde::Serialize)]
struct TransitReport<'a> {
    breakdown: Option<&'a PowerBreakdown>,
    rating: Option<&'a AuthenticTimingRating>,
}

fn print_rating(r: &AuthenticTimingRating) {
    println!(
        "{} hour ({}) for {} user: {} {}",
        r.hour_planet, r.hour_element, r.user_element, r.stars, r.label_key
    );
    println!(
        "  Strength: {} -> {} ({})",
        r.planet_strength,
        r.primary.level,
        r.primary.description.key()
    );
    println!("  Element:  {:+} ({})", r.modifier.adjustment, r.modifier.note.key());
    println!("  Final:    {}  color {}", r.final_level, r.color);
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn require_finite(name: &str, v: f64) -> Result<f64, CliError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CliError::InvalidInput(format!("{name} must be finite")))
    }
}

fn power_config(
    base: Option<f64>,
    combust_orb: Option<f64>,
    retrograde_penalty: Option<f64>,
) -> PowerConfig {
    let defaults = PowerConfig::default();
    PowerConfig {
        base: base.unwrap_or(defaults.base),
        combust_orb_deg: combust_orb.unwrap_or(defaults.combust_orb_deg),
        retrograde_penalty: retrograde_penalty.unwrap_or(defaults.retrograde_penalty),
        ..defaults
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Rate {
            planet,
            user,
            strength,
            hour_element,
            json,
        } => {
            let rating = build_authentic_rating(&RatingRequest {
                hour_planet: planet,
                hour_element: hour_element.unwrap_or(planet.element()),
                user_element: user,
                planet_strength: require_finite("strength", strength)?,
            });
            if json {
                print_json(&rating)?;
            } else {
                print_rating(&rating);
            }
        }

        Commands::Strength { score } => {
            let p = classify_strength(score);
            println!("{} ({})", p.level, p.description.key());
        }

        Commands::Compat { user, hour } => match (user, hour) {
            (Some(u), Some(h)) => {
                let m = element_modifier(u, h);
                println!("{u} -> {h}: {:+} ({})", m.adjustment, m.note.key());
            }
            (None, None) => {
                for u in ALL_ELEMENTS {
                    for h in ALL_ELEMENTS {
                        let m = element_modifier(u, h);
                        println!("{:<6} -> {:<6} {:+}  {}", u, h, m.adjustment, m.note.key());
                    }
                }
            }
            _ => {
                return Err(CliError::InvalidInput(
                    "give both elements or neither".to_string(),
                ));
            }
        },

        Commands::Transit {
            file,
            planet,
            user,
            base,
            combust_orb,
            retrograde_penalty,
            json,
        } => {
            let snapshot = load_snapshot(&file)?;
            let model = DignityPowerModel::new(power_config(base, combust_orb, retrograde_penalty));
            let rating = rate_hour_from_transits(planet, user, &snapshot, &model);
            let breakdown = match (snapshot.planet(planet), snapshot.planet(Planet::Sun)) {
                (Some(t), Some(sun)) => Some(model.breakdown(planet, t, sun)),
                _ => None,
            };

            if json {
                print_json(&TransitReport {
                    breakdown: breakdown.as_ref(),
                    rating: rating.as_ref(),
                })?;
            } else {
                match (rating, breakdown) {
                    (Some(r), Some(b)) => {
                        println!(
                            "Power: {:.1} (dignity {:?} {:+}, solar {:?} {:+}, motion {:+})",
                            b.total,
                            b.dignity,
                            b.dignity_score,
                            b.solar_phase,
                            b.solar_score,
                            b.retrograde_score
                        );
                        print_rating(&r);
                    }
                    _ => println!("Rating unavailable: snapshot has no entry for {planet} or Sun"),
                }
            }
        }

        Commands::Hour {
            weekday,
            index,
            jd,
            sunrise,
            sunset,
            next_sunrise,
            utc_offset,
        } => {
            let (day, index) = match (jd, sunrise, sunset, next_sunrise) {
                (Some(t), Some(rise), Some(set), Some(next)) => {
                    let idx = planetary_hour_index(t, rise, set, next).ok_or_else(|| {
                        CliError::InvalidInput(
                            "jd must lie in [sunrise, next-sunrise) with sunrise < sunset < next-sunrise"
                                .to_string(),
                        )
                    })?;
                    let offset = require_finite("utc-offset", utc_offset.unwrap_or(0.0))?;
                    (weekday_at_offset(rise, offset), Some(idx))
                }
                _ => {
                    let day = weekday.ok_or_else(|| {
                        CliError::InvalidInput("give --weekday or --jd".to_string())
                    })?;
                    (day, index)
                }
            };

            match index {
                Some(i) if i >= HOURS_PER_DAY => {
                    return Err(CliError::InvalidInput(format!(
                        "hour index {i} out of range (0-23)"
                    )));
                }
                Some(i) => {
                    println!(
                        "{day} hour {}: {} ({})",
                        i + 1,
                        hour_ruler(day, i),
                        hour_element(day, i)
                    );
                }
                None => {
                    for i in 0..HOURS_PER_DAY {
                        let part = if i < 12 { "day" } else { "night" };
                        println!(
                            "{:>2} {:<5} {:<8} {}",
                            i + 1,
                            part,
                            hour_ruler(day, i),
                            hour_element(day, i)
                        );
                    }
                }
            }
        }

        Commands::Burj { lon } => {
            let info = burj_from_longitude(require_finite("longitude", lon)?);
            let b = info.burj;
            println!(
                "{} ({}) {:.4} deg - {}, ruled by {}",
                b.name(),
                b.western_name(),
                info.degree_in_sign,
                b.element(),
                b.ruler()
            );
        }

        Commands::Recommend { planet, json } => {
            let rec = get_planetary_recommendations(planet);
            if json {
                print_json(&rec)?;
            } else {
                println!("{planet} hour");
                println!("  Recommended:");
                for item in rec.recommended {
                    println!("    - {item}");
                }
                println!("  Avoid:");
                for item in rec.avoid {
                    println!("    - {item}");
                }
                if let (Some(d), Some(a)) = (rec.dhikr, rec.dhikr_arabic) {
                    println!("  Dhikr: {d} ({a})");
                }
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
