mod lookup;

pub use lookup::ArtistLookup;
