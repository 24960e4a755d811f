mod home;
pub use home::Home;

mod profiling;
pub use profiling::Profiling;
