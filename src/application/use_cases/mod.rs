/// Use cases module containing application business logic orchestration
mod parse_reports;

pub use parse_reports::ParseReportsUseCase;
