mod cascade;
mod scenario;
