mod activities;
mod helpers;
mod home;
