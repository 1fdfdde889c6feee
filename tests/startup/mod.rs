mod migrate;
mod seed;
