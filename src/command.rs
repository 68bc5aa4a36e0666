use crate::airport::Airport;
use crate::error::CommandError;
use crate::plane::{Aircraft, PlaneId};
use crate::weather::{ControlledWeather, Weather};
use colored::Colorize;
use std::sync::Arc;
use tabled::Tabled;
use tabled::settings::{Alignment, Style};

pub const COMMANDS: [&str; 9] = [
    "ls", "land", "takeoff", "spawn", "weather", "status", "help", "exit", "quit",
];

/// Tables longer than this go through the pager.
pub const PAGE_ROWS: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherMode {
    Force(Weather),
    Auto,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Land { callsign: PlaneId, model: Option<String> },
    Takeoff { callsign: PlaneId },
    Spawn,
    Weather(Option<WeatherMode>),
    Status,
    Help,
    Exit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(name) = parts.first() else {
            return Err(CommandError::Usage("help"));
        };
        match *name {
            "ls" => Ok(Command::List),
            "land" => match parts.get(1) {
                Some(callsign) => Ok(Command::Land {
                    callsign: Arc::from(*callsign),
                    model: parts.get(2).map(|m| m.to_string()),
                }),
                None => Err(CommandError::Usage("land <callsign> [model]")),
            },
            "takeoff" => match parts.get(1) {
                Some(callsign) => Ok(Command::Takeoff {
                    callsign: Arc::from(*callsign),
                }),
                None => Err(CommandError::Usage("takeoff <callsign>")),
            },
            "spawn" => Ok(Command::Spawn),
            "weather" => match parts.get(1) {
                None => Ok(Command::Weather(None)),
                Some(arg) if arg.eq_ignore_ascii_case("auto") => Ok(Command::Weather(Some(WeatherMode::Auto))),
                Some(arg) => arg
                    .parse::<Weather>()
                    .map(|w| Command::Weather(Some(WeatherMode::Force(w))))
                    .map_err(CommandError::InvalidWeather),
            },
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "exit" | "quit" => Ok(Command::Exit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Reply {
    Print(String),
    Page(String),
    Exit,
}

#[derive(Tabled)]
struct Stand {
    #[tabled(rename = "Stand")]
    stand: usize,
    #[tabled(rename = "Callsign")]
    callsign: PlaneId,
    #[tabled(rename = "Model")]
    model: String,
}

fn stands(airport: &Airport<ControlledWeather>) -> Vec<Stand> {
    let mut planes: Vec<_> = airport.planes().collect();
    planes.sort_by(|a, b| a.id().cmp(b.id()));
    planes
        .into_iter()
        .enumerate()
        .map(|(i, plane)| Stand {
            stand: i + 1,
            callsign: plane.id().clone(),
            model: plane.model().unwrap_or("-").to_string(),
        })
        .collect()
}

fn weather_mode(weather: &ControlledWeather) -> String {
    match weather.forced() {
        Some(w) => format!("forced {}", w),
        None => format!("auto ({:.0}% storms)", weather.storm_chance() * 100.0),
    }
}

pub fn help() -> String {
    [
        "",
        "Available Commands:",
        "  ls                       - List grounded planes",
        "  land <callsign> [model]  - Clear a plane to land",
        "  takeoff <callsign>       - Clear a grounded plane for takeoff",
        "  spawn                    - Create a new plane and clear it to land",
        "  weather [sunny|stormy|auto] - Show, force or release the weather",
        "  status                   - Show occupancy and weather mode",
        "  help / ?                 - Show this help menu",
        "  exit / quit              - Leave the tower",
        "",
    ]
    .join("\n")
}

pub fn execute(airport: &mut Airport<ControlledWeather>, command: Command) -> Reply {
    match command {
        Command::List => {
            let rows = stands(airport);
            if rows.is_empty() {
                return Reply::Print("No planes on the ground.".to_string());
            }
            let count = rows.len();
            let mut table = tabled::Table::new(rows);
            table.with(Style::rounded());
            table.with(Alignment::left());
            if count > PAGE_ROWS {
                Reply::Page(table.to_string())
            } else {
                Reply::Print(table.to_string())
            }
        }
        Command::Land { callsign, model } => {
            let aircraft = match model {
                Some(model) => Aircraft::with_model(callsign, model),
                None => Aircraft::new(callsign),
            };
            match airport.clear_landing(Arc::new(aircraft)) {
                Ok(plane) => Reply::Print(format!("{} cleared to land.", plane).green().to_string()),
                Err(e) => Reply::Print(e.to_string().red().to_string()),
            }
        }
        Command::Takeoff { callsign } => {
            let outcome = match airport.get(&callsign).cloned() {
                Some(plane) => airport.clear_takeoff(&*plane),
                None => airport.clear_takeoff(&Aircraft::new(callsign.clone())),
            };
            match outcome {
                Ok(()) => Reply::Print(format!("{} cleared for takeoff.", callsign).green().to_string()),
                Err(e) => Reply::Print(e.to_string().red().to_string()),
            }
        }
        Command::Spawn => match airport.create_plane() {
            Ok(plane) => Reply::Print(format!("{} created and landed.", plane).green().to_string()),
            Err(e) => Reply::Print(e.to_string().red().to_string()),
        },
        Command::Weather(mode) => {
            let source = airport.weather_source_mut();
            match mode {
                Some(WeatherMode::Force(w)) => source.force(w),
                Some(WeatherMode::Auto) => source.release(),
                None => {}
            }
            Reply::Print(format!("Weather: {}", weather_mode(source)))
        }
        Command::Status => Reply::Print(format!(
            "{}/{} stands occupied. Weather: {}",
            airport.len(),
            airport.capacity(),
            weather_mode(airport.weather_source())
        )),
        Command::Help => Reply::Print(help()),
        Command::Exit => Reply::Exit,
    }
}
