mod appointment;
mod gender;
mod patient;
