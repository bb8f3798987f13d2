use std::env;

use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use tera::Tera;

use restorify::db::{establish_connection_pool, init_database};
use restorify::repository::DieselRepository;
use restorify::routes::api::{
    api_v1_attendance, api_v1_customers, api_v1_employees, api_v1_feedback, api_v1_menu,
    api_v1_raw_materials, api_v1_report, api_v1_suppliers, api_v1_transactions,
};
use restorify::routes::attendance::{
    add_attendance, delete_attendance, download_attendance, edit_attendance, show_attendance,
};
use restorify::routes::customers::{
    add_customer, delete_customer, download_customers, edit_customer, show_customers,
};
use restorify::routes::employees::{
    add_employee, delete_employee, download_employees, edit_employee, show_employees,
};
use restorify::routes::feedback::{
    add_feedback, delete_feedback, download_feedback, edit_feedback, show_feedback,
};
use restorify::routes::main::show_index;
use restorify::routes::menu::{
    add_menu_item, delete_menu_item, download_menu, edit_menu_item, show_menu,
};
use restorify::routes::raw_materials::{
    add_raw_material, delete_raw_material, download_raw_materials, edit_raw_material,
    show_raw_materials,
};
use restorify::routes::reports::{download_report, show_report, show_reports};
use restorify::routes::suppliers::{
    add_supplier, delete_supplier, download_suppliers, edit_supplier, show_suppliers,
};
use restorify::routes::transactions::{
    add_transaction, delete_transaction, download_transactions, edit_transaction,
    show_transactions,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());
    let templates_dir = env::var("TEMPLATES_DIR").unwrap_or("templates".to_string());

    let secret_key = match env::var("SECRET_KEY") {
        Ok(key) if key.len() >= 64 => Key::from(key.as_bytes()),
        Ok(_) => {
            log::warn!("SECRET_KEY is shorter than 64 bytes, generating a random key");
            Key::generate()
        }
        Err(_) => Key::generate(),
    };

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_database(&pool) {
        log::error!("Failed to initialize database: {e}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new(&format!("{templates_dir}/**/*")) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    log::info!("Restorify listening on {address}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(
                web::scope("/api")
                    .service(api_v1_employees)
                    .service(api_v1_customers)
                    .service(api_v1_suppliers)
                    .service(api_v1_raw_materials)
                    .service(api_v1_menu)
                    .service(api_v1_transactions)
                    .service(api_v1_feedback)
                    .service(api_v1_attendance)
                    .service(api_v1_report),
            )
            .service(show_index)
            .service(show_employees)
            .service(add_employee)
            .service(edit_employee)
            .service(download_employees)
            .service(delete_employee)
            .service(show_customers)
            .service(add_customer)
            .service(edit_customer)
            .service(download_customers)
            .service(delete_customer)
            .service(show_suppliers)
            .service(add_supplier)
            .service(edit_supplier)
            .service(download_suppliers)
            .service(delete_supplier)
            .service(show_raw_materials)
            .service(add_raw_material)
            .service(edit_raw_material)
            .service(download_raw_materials)
            .service(delete_raw_material)
            .service(show_menu)
            .service(add_menu_item)
            .service(edit_menu_item)
            .service(download_menu)
            .service(delete_menu_item)
            .service(show_transactions)
            .service(add_transaction)
            .service(edit_transaction)
            .service(download_transactions)
            .service(delete_transaction)
            .service(show_feedback)
            .service(add_feedback)
            .service(edit_feedback)
            .service(download_feedback)
            .service(delete_feedback)
            .service(show_attendance)
            .service(add_attendance)
            .service(edit_attendance)
            .service(download_attendance)
            .service(delete_attendance)
            .service(show_reports)
            .service(download_report)
            .service(show_report)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
