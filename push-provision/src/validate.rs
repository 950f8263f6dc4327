//! Pre-dispatch request-shape validation.
//!
//! An incomplete [`ProvisionRequest`] is a caller-side contract violation
//! and is rejected before anything crosses the bridge, with
//! [`PluginError::MissingData`] naming every offending field. Field paths
//! use the wire names (`clientName`, `address.postalCode`).

use crate::error::PluginError;
use crate::proto::{Address, ProvisionRequest};

fn require(missing: &mut Vec<String>, path: &str, value: &str) {
    if value.trim().is_empty() {
        missing.push(path.to_owned());
    }
}

fn check_address(missing: &mut Vec<String>, address: &Address) {
    require(missing, "address.name", &address.name);
    require(missing, "address.address1", &address.address1);
    require(missing, "address.locality", &address.locality);
    require(
        missing,
        "address.administrativeArea",
        &address.administrative_area,
    );
    require(missing, "address.countryCode", &address.country_code);
    require(missing, "address.postalCode", &address.postal_code);
    require(missing, "address.phoneNumber", &address.phone_number);
}

/// Validates a [`ProvisionRequest`] before dispatch.
///
/// # Errors
///
/// Returns [`PluginError::MissingData`] listing the wire paths of every
/// required field that is absent or empty. `address.address2` is the only
/// optional field.
pub fn validate_provision_request(request: &ProvisionRequest) -> Result<(), PluginError> {
    let mut missing = Vec::new();

    require(&mut missing, "opc", &request.opc);
    require(&mut missing, "tsp", &request.tsp);
    require(&mut missing, "clientName", &request.client_name);
    require(&mut missing, "lastDigits", &request.last_digits);
    check_address(&mut missing, &request.address);

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PluginError::MissingData { fields: missing })
    }
}
