pub mod seaorm;

pub use seaorm::SeaOrmCargoRepository;
