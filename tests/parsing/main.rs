mod deck;
mod samples;
