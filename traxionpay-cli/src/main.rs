//! TraxionPay CLI
//!
//! Command-line interface for the TraxionPay payment gateway.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use traxionpay_client::config::{BASE_URL_ENV, DEFAULT_BASE_URL};
use traxionpay_client::{GatewayConfig, TraxionPay};
use traxionpay_types::{
    BankLinkRequest, BillingDetails, BillingParams, CashInParams, CashInRequest, CashOutRequest,
    GatewayResponse,
};

#[derive(Parser)]
#[command(name = "traxionpay")]
#[command(author, version, about = "TraxionPay gateway CLI client", long_about = None)]
struct Cli {
    /// Base URL of the TraxionPay API
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Merchant API key
    #[arg(long, env = "TRAXIONPAY_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Merchant secret key
    #[arg(long, env = "TRAXIONPAY_SECRET_KEY", hide_env_values = true)]
    secret_key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a hosted payment page for a cash-in
    CashIn(CashInArgs),
    /// List banks available for payouts
    Banks,
    /// List linked bank accounts
    BankAccounts,
    /// Link a bank account for payouts
    LinkAccount {
        /// Bank code, as listed by `banks`
        #[arg(long)]
        bank: String,
        /// Account type (savings, checkings)
        #[arg(long, default_value = "savings")]
        account_type: String,
        #[arg(long)]
        account_name: String,
        #[arg(long)]
        account_number: String,
    },
    /// Request a one-time password for cash-out
    Otp,
    /// Pay out wallet funds to a linked bank account
    CashOut {
        /// One-time password from `otp`
        #[arg(long)]
        otp: String,
        #[arg(long)]
        amount: f64,
        /// Bank account id, as listed by `bank-accounts`
        #[arg(long)]
        bank_account: i64,
    },
}

#[derive(Args)]
struct CashInArgs {
    #[arg(long)]
    merchant_id: i64,
    /// Merchant reference number, unique per transaction
    #[arg(long)]
    ref_no: String,
    #[arg(long)]
    amount: f64,
    #[arg(long)]
    description: String,
    #[arg(long)]
    status_url: String,
    #[arg(long)]
    success_url: String,
    #[arg(long)]
    failure_url: String,
    #[arg(long)]
    cancel_url: String,
    #[arg(long)]
    pending_url: String,
    /// Opaque merchant data, sent Base64 encoded
    #[arg(long, default_value = "")]
    additional_data: String,
    #[arg(long)]
    payment_method: Option<String>,
    /// Defaults to PHP
    #[arg(long)]
    currency: Option<String>,

    #[command(flatten)]
    billing: BillingArgs,
}

#[derive(Args)]
struct BillingArgs {
    #[arg(long)]
    billing_email: Option<String>,
    #[arg(long)]
    billing_first_name: Option<String>,
    #[arg(long)]
    billing_last_name: Option<String>,
    #[arg(long)]
    billing_middle_name: Option<String>,
    #[arg(long)]
    billing_phone: Option<String>,
    #[arg(long)]
    billing_mobile: Option<String>,
    #[arg(long)]
    billing_address: Option<String>,
    #[arg(long)]
    billing_address2: Option<String>,
    #[arg(long)]
    billing_city: Option<String>,
    #[arg(long)]
    billing_state: Option<String>,
    #[arg(long)]
    billing_zip: Option<String>,
    /// Defaults to PH when any billing detail is given
    #[arg(long)]
    billing_country: Option<String>,
    #[arg(long)]
    billing_remark: Option<String>,
}

impl BillingArgs {
    /// Billing details, or `None` when no billing flag was given.
    fn into_details(self) -> Option<BillingDetails> {
        let params = BillingParams {
            email: self.billing_email,
            first_name: self.billing_first_name,
            last_name: self.billing_last_name,
            middle_name: self.billing_middle_name,
            phone: self.billing_phone,
            mobile: self.billing_mobile,
            address: self.billing_address,
            address2: self.billing_address2,
            city: self.billing_city,
            state: self.billing_state,
            zip: self.billing_zip,
            country: self.billing_country,
            remark: self.billing_remark,
        };
        let given = [
            &params.email,
            &params.first_name,
            &params.last_name,
            &params.middle_name,
            &params.phone,
            &params.mobile,
            &params.address,
            &params.address2,
            &params.city,
            &params.state,
            &params.zip,
            &params.country,
            &params.remark,
        ]
        .iter()
        .any(|field| field.is_some());

        given.then(|| BillingDetails::new(params))
    }
}

impl CashInArgs {
    fn into_request(self) -> (CashInRequest, Option<BillingDetails>) {
        let additional_data = if self.additional_data.is_empty() {
            String::new()
        } else {
            traxionpay_client::encode_additional_data(&self.additional_data)
        };
        let request = CashInRequest::new(CashInParams {
            merchant_id: self.merchant_id,
            merchant_ref_no: self.ref_no,
            merchant_additional_data: additional_data,
            amount: self.amount,
            description: self.description,
            status_notification_url: self.status_url,
            success_page_url: self.success_url,
            failure_page_url: self.failure_url,
            cancel_page_url: self.cancel_url,
            pending_page_url: self.pending_url,
            payment_method: self.payment_method,
            currency: self.currency,
        });
        (request, self.billing.into_details())
    }
}

fn print_response(response: &GatewayResponse) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,traxionpay_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = GatewayConfig::new(&cli.base_url);
    tracing::debug!(base_url = config.base_url(), "using gateway");
    let client = TraxionPay::with_config(cli.api_key, cli.secret_key, config)?;

    let response = match cli.command {
        Commands::CashIn(args) => {
            let (request, billing) = args.into_request();
            client.cash_in(&request, billing.as_ref()).await?
        }
        Commands::Banks => client.fetch_banks().await?,
        Commands::BankAccounts => client.fetch_bank_accounts().await?,
        Commands::LinkAccount {
            bank,
            account_type,
            account_name,
            account_number,
        } => {
            let request = BankLinkRequest::new(bank, &account_type, account_name, account_number)?;
            client.link_bank_account(&request).await?
        }
        Commands::Otp => client.fetch_otp().await?,
        Commands::CashOut {
            otp,
            amount,
            bank_account,
        } => {
            client
                .cash_out(&CashOutRequest::new(otp, amount, bank_account))
                .await?
        }
    };

    print_response(&response)
}
