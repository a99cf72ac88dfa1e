mod algebra;
mod round_trip;
