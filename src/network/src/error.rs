///Enum of network error results.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    ///Wrong value passed to a factory, e.g. an unknown controlling quantity.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    ///Two distinct elements, or an element and a constant, share a symbol.
    #[error("Symbol {symbol} is already used by {existing}")]
    SymbolCollision { symbol: String, existing: String },
    ///A constant or variable is registered twice.
    #[error("{0} is already defined")]
    DuplicateDefinition(String),
    ///The ground node of a network without edges is requested.
    #[error("Network is empty, thus there is no ground node")]
    EmptyNetwork,
    ///The ground label is not a node of the network.
    #[error("Ground node {0} is not part of the network")]
    NoGroundNode(String),
}
