//! Vendor commands: list, show, add, edit, delete.

use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use vendorhub_client::controller::DeleteOutcome;
use vendorhub_client::form::VendorForm;
use vendorhub_client::{Confirm, Session, VendorListController, confirm_and_delete};
use vendorhub_core::error::AppError;
use vendorhub_core::types::id::VendorId;
use vendorhub_entity::vendor::model::{Vendor, VendorFields};

use super::Context;
use crate::output::{self, OutputFormat};

/// Arguments for `list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page to show (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: u64,
    /// Only show vendors on this page whose name contains the text
    #[arg(short, long)]
    pub search: Option<String>,
}

/// A vendor ID argument
#[derive(Debug, Args)]
pub struct IdArgs {
    /// Vendor ID
    pub id: VendorId,
}

/// Vendor field flags shared by `add` and `edit`
#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub account_no: Option<String>,
    #[arg(long)]
    pub bank_name: Option<String>,
    #[arg(long)]
    pub address_line1: Option<String>,
    #[arg(long)]
    pub address_line2: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub zip_code: Option<String>,
}

impl FieldArgs {
    fn apply_to(&self, fields: &mut VendorFields) {
        let set = |target: &mut String, value: &Option<String>| {
            if let Some(v) = value {
                *target = v.clone();
            }
        };
        set(&mut fields.name, &self.name);
        set(&mut fields.account_no, &self.account_no);
        set(&mut fields.bank_name, &self.bank_name);

        for (target, value) in [
            (&mut fields.address_line1, &self.address_line1),
            (&mut fields.address_line2, &self.address_line2),
            (&mut fields.city, &self.city),
            (&mut fields.country, &self.country),
            (&mut fields.zip_code, &self.zip_code),
        ] {
            if value.is_some() {
                *target = value.clone();
            }
        }
    }
}

/// Arguments for `edit`
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Vendor ID
    pub id: VendorId,
    #[command(flatten)]
    pub fields: FieldArgs,
}

/// Arguments for `delete`
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Vendor ID
    pub id: VendorId,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Vendor display row for table output
#[derive(Debug, Serialize, Tabled)]
struct VendorRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Bank")]
    bank_name: String,
    #[tabled(rename = "Account")]
    account_no: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Created by")]
    creator_email: String,
    #[tabled(rename = "Yours")]
    yours: String,
}

impl VendorRow {
    fn new(vendor: &Vendor, can_edit: bool) -> Self {
        Self {
            id: vendor.id.to_string(),
            name: vendor.name.clone(),
            bank_name: vendor.bank_name.clone(),
            account_no: vendor.account_no.clone(),
            city: vendor.city.clone().unwrap_or_default(),
            creator_email: vendor.creator_email.clone(),
            yours: if can_edit { "✓".into() } else { String::new() },
        }
    }
}

/// Confirmation through an interactive terminal prompt.
struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Show one page of vendors.
pub async fn list(ctx: &Context, args: &ListArgs) -> Result<(), AppError> {
    let session = ctx.sessions.restore()?;
    let mut controller =
        VendorListController::new(Arc::new(ctx.api.clone()), ctx.config.page_size);
    controller.navigate(args.page);
    controller.settle().await;
    if let Some(search) = &args.search {
        controller.set_search(search);
    }

    let view = controller.view();
    if let Some(error) = view.error() {
        return Err(AppError::external_service(error.to_string()));
    }

    let email = session.as_ref().map(Session::email).unwrap_or_default();
    let rows: Vec<VendorRow> = view
        .rows_for(email)
        .into_iter()
        .map(|row| VendorRow::new(row.vendor, row.can_edit))
        .collect();

    match ctx.format {
        OutputFormat::Json => output::print_json(&view.visible()),
        OutputFormat::Table => {
            output::print_list(&rows, OutputFormat::Table);
            println!("{}", view.summary());
            if view.total_pages() > 1 {
                let pages: Vec<String> = view
                    .page_numbers()
                    .map(|p| if p == view.page() { format!("[{p}]") } else { p.to_string() })
                    .collect();
                println!("Pages: {}", pages.join(" "));
            }
        }
    }
    Ok(())
}

/// Show a single vendor.
pub async fn show(ctx: &Context, args: &IdArgs) -> Result<(), AppError> {
    let session = ctx.sessions.restore()?;
    let vendor = ctx.api.get(session.as_ref(), args.id).await?;
    print_vendor(&vendor, ctx.format);
    Ok(())
}

/// Create a vendor, prompting for missing required fields.
pub async fn add(ctx: &Context, args: &FieldArgs) -> Result<(), AppError> {
    let session = ctx.sessions.restore()?;
    let mut form = VendorForm::create();
    args.apply_to(&mut form.fields);

    if !form.validate() {
        prompt_required(&mut form)?;
    }

    let vendor = form.submit(&ctx.api, session.as_ref()).await?;
    output::print_success(&format!("Created vendor {}", vendor.id));
    print_vendor(&vendor, ctx.format);
    Ok(())
}

/// Edit a vendor the session user created.
pub async fn edit(ctx: &Context, args: &EditArgs) -> Result<(), AppError> {
    let session = ctx.sessions.restore()?;
    let mut form = VendorForm::load(&ctx.api, session.as_ref(), args.id).await?;
    args.fields.apply_to(&mut form.fields);

    let vendor = form.submit(&ctx.api, session.as_ref()).await?;
    output::print_success(&format!("Updated vendor {}", vendor.id));
    print_vendor(&vendor, ctx.format);
    Ok(())
}

/// Delete a vendor after confirmation.
pub async fn delete(ctx: &Context, args: &DeleteArgs) -> Result<(), AppError> {
    let session = ctx.sessions.restore()?;

    let always = |_: &str| true;
    let confirm: &dyn Confirm = if args.yes { &always } else { &TerminalConfirm };

    match confirm_and_delete(&ctx.api, session.as_ref(), args.id, confirm).await? {
        DeleteOutcome::Deleted => output::print_success(&format!("Deleted vendor {}", args.id)),
        DeleteOutcome::Cancelled => output::print_warning("Cancelled"),
    }
    Ok(())
}

fn prompt_required(form: &mut VendorForm) -> Result<(), AppError> {
    let prompts: [(&str, &str); 3] = [
        ("name", "Vendor name"),
        ("accountNo", "Bank account number"),
        ("bankName", "Bank name"),
    ];
    for (field, label) in prompts {
        if form.error(field).is_none() {
            continue;
        }
        let value: String = dialoguer::Input::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
        match field {
            "name" => form.fields.name = value,
            "accountNo" => form.fields.account_no = value,
            _ => form.fields.bank_name = value,
        }
    }
    Ok(())
}

fn print_vendor(vendor: &Vendor, format: OutputFormat) {
    match format {
        OutputFormat::Json => output::print_json(vendor),
        OutputFormat::Table => {
            output::print_kv("ID", &vendor.id.to_string());
            output::print_kv("Name", &vendor.name);
            output::print_kv("Account no", &vendor.account_no);
            output::print_kv("Bank", &vendor.bank_name);
            for (label, value) in [
                ("Address 1", &vendor.address_line1),
                ("Address 2", &vendor.address_line2),
                ("City", &vendor.city),
                ("Country", &vendor.country),
                ("Zip code", &vendor.zip_code),
            ] {
                if let Some(value) = value {
                    output::print_kv(label, value);
                }
            }
            output::print_kv("Created by", &vendor.creator_email);
            output::print_kv("Updated", &vendor.updated_at.to_rfc3339());
        }
    }
}
