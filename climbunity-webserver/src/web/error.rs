use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

use climbunity_application::error::{AppError, BError};
pub use climbunity_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    match err {
                        BError::Parameter(err) => {
                            return Err(match err {
                                ParameterError::Credentials
                                | ParameterError::UserDoesNotExist
                                | ParameterError::Unauthorized => Status::Unauthorized,
                                ParameterError::Forbidden => Status::Forbidden,
                                _ => Status::BadRequest,
                            });
                        }
                        BError::Repo(RepoError::NotFound) => {
                            return Err(Status::NotFound);
                        }
                        _ => {}
                    }
                }
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        AppError::from(err).into()
    }
}
