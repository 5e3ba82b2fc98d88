mod record;
pub use self::record::{decode_records, FieldValue, Record};

mod rates;
pub use self::rates::{BanknoteRate, TransferRate};

mod curve;
pub use self::curve::CurvePoint;

mod auction;
pub use self::auction::PolicyOperationResult;
