pub mod seaorm;

pub use seaorm::SeaOrmMovementRepository;
