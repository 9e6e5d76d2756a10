pub mod use_cases;

pub use use_cases::load::LoadUseCase;
pub use use_cases::transform::TransformUseCase;
pub use use_cases::visualize::VisualizeUseCase;
