use crate::{
    configuration::Configuration,
    slots::BusinessHours,
    types::{Stylist, StylistId, TimeOfDay},
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "salon_booking", about = "Appointment booking for a hairdressing salon")]
pub struct ConfigurationHandler {
    #[arg(long, env = "SALON_PORT", default_value_t = 3000)]
    port: u16,

    #[arg(long, env = "SALON_ADMIN_USER", default_value = "admin")]
    admin_user: String,

    #[arg(long, env = "SALON_ADMIN_PASSWORD", default_value = "admin")]
    admin_password: String,

    /// Opening time, HH:MM
    #[arg(long, env = "SALON_OPEN", default_value = "09:00", value_parser = parse_time)]
    open: TimeOfDay,

    /// Closing time, HH:MM
    #[arg(long, env = "SALON_CLOSE", default_value = "17:00", value_parser = parse_time)]
    close: TimeOfDay,

    #[arg(
        long,
        env = "SALON_SLOT_MINUTES",
        default_value_t = 30,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    slot_minutes: u16,

    /// Stylist as <id>=<name>, repeatable or comma separated
    #[arg(
        long = "stylist",
        env = "SALON_STYLISTS",
        value_delimiter = ',',
        default_values = ["1=Katrin", "2=Marko"],
        value_parser = parse_stylist
    )]
    stylists: Vec<Stylist>,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        Self::parse()
    }
}

/// Business hours must lie within one day, unlike booking times.
fn parse_time(value: &str) -> Result<TimeOfDay, String> {
    match value.parse::<TimeOfDay>() {
        Ok(time) if time < TimeOfDay::hm(24, 0) => Ok(time),
        _ => Err(format!("expected a time of day as HH:MM, got {value}")),
    }
}

fn parse_stylist(value: &str) -> Result<Stylist, String> {
    let (id, name) = value
        .split_once('=')
        .ok_or_else(|| format!("expected <id>=<name>, got {value}"))?;
    let id: StylistId = id
        .trim()
        .parse()
        .map_err(|err| format!("invalid stylist id {id}: {err}"))?;
    if id <= 0 {
        return Err(format!("stylist id must be positive, got {id}"));
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("stylist {id} has no name"));
    }
    Ok(Stylist {
        id,
        name: name.into(),
    })
}

impl Configuration for ConfigurationHandler {
    fn port(&self) -> u16 {
        self.port
    }

    fn admin_user(&self) -> String {
        self.admin_user.clone()
    }

    fn admin_password(&self) -> String {
        self.admin_password.clone()
    }

    fn business_hours(&self) -> BusinessHours {
        BusinessHours {
            open: self.open,
            close: self.close,
            slot_minutes: self.slot_minutes,
        }
    }

    fn stylists(&self) -> Vec<Stylist> {
        self.stylists.clone()
    }
}
