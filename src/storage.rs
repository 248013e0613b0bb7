pub mod adj_list;
pub mod implicit;

pub use adj_list::AdjList;
pub use implicit::Implicit;
