use crate::{slots::BusinessHours, types::Stylist};

pub trait Configuration: Clone + Send + Sync + 'static {
    fn port(&self) -> u16;
    fn admin_user(&self) -> String;
    fn admin_password(&self) -> String;
    fn business_hours(&self) -> BusinessHours;
    fn stylists(&self) -> Vec<Stylist>;
}
