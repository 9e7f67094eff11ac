/// Field type used when comparing records
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// String, compared byte by byte
    String,
    /// Signed 64 bit integer
    Integer,
}
