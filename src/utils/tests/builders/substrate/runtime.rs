use crate::models::RuntimeVersion;

/// Creates a runtime version for `spec_name` at `spec_version`
pub fn runtime_version(spec_name: &str, spec_version: u32) -> RuntimeVersion {
	RuntimeVersion {
		spec_name: spec_name.to_string(),
		impl_name: spec_name.to_string(),
		spec_version,
		impl_version: 0,
		transaction_version: 1,
	}
}
