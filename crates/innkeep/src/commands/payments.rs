//! Payment command handlers.

use innkeep_api::ApiClient;

use crate::cli::{GlobalOpts, PaymentsArgs, PaymentsCommand};
use crate::error::CliError;
use crate::output::{self, field};

use super::util;

pub async fn handle(
    client: &ApiClient,
    args: PaymentsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    util::require_login(client)?;
    let payments = client.payments();

    match args.command {
        PaymentsCommand::Create {
            reservation_id,
            amount,
            note,
        } => {
            if !amount.is_finite() || amount <= 0.0 {
                return Err(CliError::Validation {
                    field: "amount".into(),
                    reason: "must be a positive number".into(),
                });
            }
            let payment = payments
                .create(reservation_id, amount, note.as_deref())
                .await?;
            output::status(global, "Payment created");
            let out = output::render_single(&global.output, &payment, output::detail, |p| {
                field(p, "transactionId")
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PaymentsCommand::Simulate { transaction_id } => {
            let envelope = payments.simulate(&transaction_id).await?;
            util::report(
                envelope,
                &format!("Transaction {transaction_id} marked paid"),
                global,
            )
        }
    }
}
