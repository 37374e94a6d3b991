use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use solunar_rs::{
    EventError, LunarDayState, SolarDayState, SolarThreshold, Solunar,
};

#[derive(Parser)]
#[command(name = "solunar", about = "Solar/lunar horizon-event CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solar events for the civil day of a zoned instant
    SunDay {
        /// Latitude in degrees, north positive
        lat: f64,
        /// Longitude in degrees, east positive
        lon: f64,
        /// Zoned datetime (RFC 3339, e.g. 2025-03-20T12:00:00+03:00)
        #[arg(long)]
        date: String,
        /// Twilight threshold: horizon, civil, nautical, astronomical
        #[arg(long, default_value = "horizon")]
        threshold: String,
    },
    /// Lunar events, visibility, and phase for the civil day
    MoonDay {
        lat: f64,
        lon: f64,
        /// Zoned datetime (RFC 3339)
        #[arg(long)]
        date: String,
    },
    /// Next upcoming solar event
    NextSun {
        lat: f64,
        lon: f64,
        /// Zoned datetime (RFC 3339)
        #[arg(long)]
        date: String,
    },
    /// Next upcoming lunar event
    NextMoon {
        lat: f64,
        lon: f64,
        /// Zoned datetime (RFC 3339)
        #[arg(long)]
        date: String,
    },
    /// Magic-hour windows for the civil day
    MagicHour {
        lat: f64,
        lon: f64,
        /// Zoned datetime (RFC 3339)
        #[arg(long)]
        date: String,
    },
    /// Lunar age and illumination at an instant
    MoonPhase {
        /// Zoned datetime (RFC 3339)
        #[arg(long)]
        date: String,
    },
}

fn parse_instant(s: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(s).map_err(|e| format!("invalid datetime '{s}': {e}"))
}

fn parse_threshold(s: &str) -> Result<SolarThreshold, String> {
    match s {
        "horizon" => Ok(SolarThreshold::Horizon),
        "civil" => Ok(SolarThreshold::CivilTwilight),
        "nautical" => Ok(SolarThreshold::NauticalTwilight),
        "astronomical" => Ok(SolarThreshold::AstronomicalTwilight),
        _ => Err(format!("unknown threshold '{s}'")),
    }
}

fn solar_state_label(state: SolarDayState) -> &'static str {
    match state {
        SolarDayState::RisenAndSet => "risen-and-set",
        SolarDayState::SetAndRisen => "set-and-risen",
        SolarDayState::PolarDay => "polar-day",
        SolarDayState::PolarNight => "polar-night",
    }
}

fn lunar_state_label(state: LunarDayState) -> &'static str {
    match state {
        LunarDayState::SetAndRisen => "set-and-risen",
        LunarDayState::RisenAndSet => "risen-and-set",
        LunarDayState::SetRiseSet => "set-rise-set",
        LunarDayState::FullDay => "full-day",
        LunarDayState::FullNight => "full-night",
        LunarDayState::OnlySet => "only-set",
        LunarDayState::OnlyRisen => "only-risen",
        LunarDayState::Error => "error",
    }
}

fn run(command: Commands) -> Result<(), String> {
    match command {
        Commands::SunDay {
            lat,
            lon,
            date,
            threshold,
        } => {
            let instant = parse_instant(&date)?;
            let calc = solunar_rs::SolarCalculator::with_threshold(parse_threshold(&threshold)?);
            let day = calc
                .relative_event_day(lat, lon, &instant)
                .map_err(fmt_err)?;
            println!("state: {}", solar_state_label(day.state));
            println!("previous: {}", solar_state_label(day.previous_state));
            for e in &day.events {
                println!(
                    "{:?} at {} (az {:.1} deg, {} ms from query)",
                    e.kind, e.time_of_day, e.azimuth_deg, e.millis_from_query
                );
            }
            println!("day length: {}", day.day_length);
            println!("night length: {}", day.night_length);
            if let Some(noon) = day.meridian_crossing {
                println!("solar noon: {noon}");
            }
            if let Some(midnight) = day.antimeridian_crossing {
                println!("solar midnight: {midnight}");
            }
        }
        Commands::MoonDay { lat, lon, date } => {
            let instant = parse_instant(&date)?;
            let day = Solunar::lunar()
                .relative_event_day(lat, lon, &instant)
                .map_err(fmt_err)?;
            println!("state: {}", lunar_state_label(day.state));
            for e in &day.events {
                println!("{:?} at {} (az {:.1} deg)", e.kind, e.time_of_day, e.azimuth_deg);
            }
            println!("visible: {}", day.visible_length);
            println!("invisible: {}", day.invisible_length);
            println!(
                "phase: {:.1} d, {:.0}% illuminated",
                day.phase.age_days, day.phase.illumination_percent
            );
        }
        Commands::NextSun { lat, lon, date } => {
            let instant = parse_instant(&date)?;
            match Solunar::solar()
                .next_event_short(lat, lon, &instant)
                .map_err(fmt_err)?
            {
                Some(e) => println!(
                    "{:?} in {} ms (az {:.1} deg)",
                    e.kind, e.millis_from_query, e.azimuth_deg
                ),
                None => println!("no solar event within the search bound"),
            }
        }
        Commands::NextMoon { lat, lon, date } => {
            let instant = parse_instant(&date)?;
            match Solunar::lunar()
                .next_event_relative(lat, lon, &instant)
                .map_err(fmt_err)?
            {
                Some(e) => println!(
                    "{:?} at {} ({} ms from query, az {:.1} deg)",
                    e.kind, e.time_of_day, e.millis_from_query, e.azimuth_deg
                ),
                None => println!("no lunar event within the search bound"),
            }
        }
        Commands::MagicHour { lat, lon, date } => {
            let instant = parse_instant(&date)?;
            let period = Solunar::solar().magic_hour(lat, lon, &instant).map_err(fmt_err)?;
            for iv in &period.intervals {
                let az = |p: Option<f64>| {
                    p.map_or("day edge".to_string(), |a| format!("az {a:.1} deg"))
                };
                println!(
                    "window {} .. {} ({}, {})",
                    iv.start.time,
                    iv.finish.time,
                    az(iv.start.azimuth_deg),
                    az(iv.finish.azimuth_deg)
                );
            }
            println!("daylight: {}", period.daylight);
            println!("darkness: {}", period.darkness);
        }
        Commands::MoonPhase { date } => {
            let instant = parse_instant(&date)?;
            let info = solunar_rs::lunar_phase(solunar_rs::jd_ut_from_instant(&instant));
            println!(
                "age {:.2} d, {:.1}% illuminated",
                info.age_days, info.illumination_percent
            );
        }
    }
    Ok(())
}

fn fmt_err(e: EventError) -> String {
    e.to_string()
}

fn main() {
    let cli = Cli::parse();
    if let Err(msg) = run(cli.command) {
        eprintln!("error: {msg}");
        std::process::exit(1);
    }
}
