pub mod seaorm;

pub use seaorm::SeaOrmVisitRepository;
