//! Signing a transaction hash for a list of signers.

use neo_config::SigningSettings;
use neo_core::{get_sign_data, CoreResult, Signer, Witness};
use neo_io::IoError;
use neo_primitives::Hash256;
use tracing::{debug, warn};

/// Produces one witness per signer, in signer order.
///
/// The signed message is the network magic of `settings` followed by
/// `tx_hash`. Account signers must hold their key pair; contract signers
/// get a contract witness from their `verify` parameters. Witness scripts
/// are checked against the script caps of `settings`.
pub fn sign_transaction(
    signers: &[Signer],
    tx_hash: &Hash256,
    settings: &SigningSettings,
) -> CoreResult<Vec<Witness>> {
    let message = get_sign_data(settings.network.magic(), tx_hash);
    let mut witnesses = Vec::with_capacity(signers.len());
    for signer in signers {
        let witness = signer.create_witness(&message)?;
        check_script_caps(&witness, settings)?;
        debug!(
            signer = %signer,
            invocation = witness.invocation_script.len(),
            verification = witness.verification_script.len(),
            "witness produced"
        );
        witnesses.push(witness);
    }
    Ok(witnesses)
}

fn check_script_caps(witness: &Witness, settings: &SigningSettings) -> CoreResult<()> {
    let invocation = witness.invocation_script.len();
    if invocation > settings.max_invocation_script {
        warn!(invocation, max = settings.max_invocation_script, "invocation script too large");
        return Err(IoError::exceeds(invocation, settings.max_invocation_script).into());
    }
    let verification = witness.verification_script.len();
    if verification > settings.max_verification_script {
        warn!(verification, max = settings.max_verification_script, "verification script too large");
        return Err(IoError::exceeds(verification, settings.max_verification_script).into());
    }
    Ok(())
}
