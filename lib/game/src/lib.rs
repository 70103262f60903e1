pub mod representations {
	pub mod board;
	pub mod piece;
	pub mod state;
	pub mod moves;
}

pub mod rules {
	pub mod legality;
	pub mod capture;
	pub mod promotion;
}

pub mod moves {
	pub mod move_list;
	pub mod perft;
}

pub mod constants;
pub mod error;
pub mod picking;
pub mod presenter;
