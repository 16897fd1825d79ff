use ndarray::ShapeError;

/// Main error type for the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImgError {
    /// The buffer does not have the rank or channel count the operation needs.
    InvalidShape(String),
    /// A zero duration or an empty original buffer was used as a divisor.
    DivisionByZero(String),
    /// A region or outline would index outside the image.
    OutOfBounds(String),
    /// Used when the user pass a logical invalid parameter to a function.
    InvalidParameter(String),
}

impl std::fmt::Display for ImgError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ImgError::InvalidShape(err) => write!(f, "Shape error: {}", err),
            ImgError::DivisionByZero(err) => write!(f, "Division by zero: {}", err),
            ImgError::OutOfBounds(err) => write!(f, "Out of bounds: {}", err),
            ImgError::InvalidParameter(err) => write!(f, "Parameter error: {}", err),
        }
    }
}

impl ImgError {
    /// Create a error with the kind `InvalidShape`.
    /// # Arguments
    /// * `msg` - The error message.
    pub fn invalid_shape<T: ToString>(msg: T) -> Self {
        ImgError::InvalidShape(msg.to_string())
    }

    /// Create a error with the kind `DivisionByZero`.
    pub fn division_by_zero<T: ToString>(msg: T) -> Self {
        ImgError::DivisionByZero(msg.to_string())
    }

    /// Create a error with the kind `OutOfBounds`.
    pub fn out_of_bounds<T: ToString>(msg: T) -> Self {
        ImgError::OutOfBounds(msg.to_string())
    }

    /// Create a error with the kind `InvalidParameter`.
    pub fn invalid_parameter<T: ToString>(msg: T) -> Self {
        ImgError::InvalidParameter(msg.to_string())
    }
}

impl From<ShapeError> for ImgError {
    fn from(err: ShapeError) -> Self {
        ImgError::InvalidShape(err.to_string())
    }
}

impl std::error::Error for ImgError {}
