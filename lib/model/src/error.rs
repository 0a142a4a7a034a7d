use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Duplicate school id: {0}")]
    DuplicateSchoolId(u32),

    #[error("{dataset} record references unknown school id {id}")]
    UnknownSchoolId { dataset: &'static str, id: u32 },

    #[error("Demographic percentages for school {0} sum to zero")]
    ZeroDemographicSum(u32),

    #[error("School not found: {0}")]
    SchoolNotFound(u32),
}
