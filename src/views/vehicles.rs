//! Páginas de vehículos: listado y detalle con historial de mantenimiento

use std::fmt::Write;

use super::layout::{escape_html, page};
use crate::models::{MaintenanceRecord, Vehicle};

fn format_mileage(mileage: Option<f64>) -> String {
    match mileage {
        Some(miles) => format!("{:.2} mi", miles),
        None => "Unavailable".to_string(),
    }
}

fn vehicle_path(vehicle_id: &str) -> String {
    format!("/vehicles/{}", urlencoding::encode(vehicle_id))
}

/// Listado de todos los vehículos
pub fn vehicle_list_page(vehicles: &[Vehicle]) -> String {
    let mut body = String::from("<h1>Vehicles</h1>\n");

    if vehicles.is_empty() {
        body.push_str(
            "<p>No vehicles yet. <a href=\"/login\">Connect your vehicles</a> to get started.</p>\n",
        );
        return page("Vehicles", &body);
    }

    body.push_str(
        "<table>\n<thead><tr><th>Vehicle</th><th>VIN</th><th>Mileage</th><th>Last updated</th></tr></thead>\n<tbody>\n",
    );
    for vehicle in vehicles {
        let _ = writeln!(
            body,
            "<tr><td><a href=\"{}\">{}</a></td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&vehicle_path(&vehicle.vehicle_id)),
            escape_html(&vehicle.display_name()),
            escape_html(&vehicle.vin),
            format_mileage(vehicle.mileage),
            vehicle.last_updated.format("%Y-%m-%d %H:%M UTC"),
        );
    }
    body.push_str("</tbody>\n</table>\n");

    page("Vehicles", &body)
}

/// Campos del formulario de mantenimiento, con valores previos si se edita
fn maintenance_fields(record: Option<&MaintenanceRecord>) -> String {
    let date = record.map(|r| r.date.format("%Y-%m-%d").to_string()).unwrap_or_default();
    let mileage = record.map(|r| r.mileage.to_string()).unwrap_or_default();
    let types = record.map(|r| r.service_types.join(", ")).unwrap_or_default();
    let shop = record.map(|r| r.shop.as_str()).unwrap_or_default();

    let mut fields = format!(
        "<input type=\"date\" name=\"date\" value=\"{}\" required> \
         <input type=\"number\" name=\"mileage\" min=\"0\" placeholder=\"Mileage\" value=\"{}\" required> \
         <input type=\"text\" name=\"shop\" placeholder=\"Shop\" value=\"{}\"> ",
        escape_html(&date),
        escape_html(&mileage),
        escape_html(shop),
    );

    // Un campo por tipo existente más uno vacío para añadir otro
    if let Some(record) = record {
        for service_type in &record.service_types {
            let _ = write!(
                fields,
                "<input type=\"text\" name=\"type[]\" value=\"{}\"> ",
                escape_html(service_type)
            );
        }
    }
    let _ = write!(
        fields,
        "<input type=\"text\" name=\"type[]\" placeholder=\"Service type\"{}>",
        if types.is_empty() { " required" } else { "" }
    );

    fields
}

/// Detalle de un vehículo con su historial de mantenimiento
pub fn vehicle_detail_page(vehicle: &Vehicle, time_ago: &str) -> String {
    let base = vehicle_path(&vehicle.vehicle_id);
    let name = vehicle.display_name();
    let mut body = String::new();

    let _ = write!(
        body,
        "<h1>{}</h1>\n<dl>\n\
         <dt>Vehicle ID</dt><dd>{}</dd>\n\
         <dt>Make</dt><dd>{}</dd>\n\
         <dt>Model</dt><dd>{}</dd>\n\
         <dt>Year</dt><dd>{}</dd>\n\
         <dt>VIN</dt><dd>{}</dd>\n\
         <dt>Mileage</dt><dd>{}</dd>\n\
         <dt>Last updated</dt><dd>{}</dd>\n</dl>\n",
        escape_html(&name),
        escape_html(&vehicle.vehicle_id),
        escape_html(vehicle.make.as_deref().unwrap_or("Unknown")),
        escape_html(vehicle.model.as_deref().unwrap_or("Unknown")),
        vehicle.year.map(|y| y.to_string()).unwrap_or_else(|| "Unknown".to_string()),
        escape_html(&vehicle.vin),
        format_mileage(vehicle.mileage),
        escape_html(time_ago),
    );

    body.push_str("<h2>Maintenance history</h2>\n");
    if vehicle.maintenance_records.is_empty() {
        body.push_str("<p>No maintenance records.</p>\n");
    } else {
        body.push_str(
            "<table>\n<thead><tr><th>Date</th><th>Mileage</th><th>Services</th><th>Shop</th><th></th></tr></thead>\n<tbody>\n",
        );
        for record in &vehicle.maintenance_records {
            let record_path = format!("{}/maintenance/{}", base, record.id);
            let _ = writeln!(
                body,
                "<tr id=\"record-{id}\"><td>{date}</td><td>{mileage}</td><td>{types}</td><td>{shop}</td><td>\
                 <details><summary>Edit</summary>\
                 <form method=\"post\" action=\"{path}/edit\">{fields} <button type=\"submit\">Save</button></form>\
                 </details>\
                 <form class=\"inline\" method=\"post\" action=\"{path}/delete\"><button type=\"submit\">Delete</button></form>\
                 </td></tr>",
                id = record.id,
                date = record.date.format("%Y-%m-%d"),
                mileage = record.mileage,
                types = escape_html(&record.service_types.join(", ")),
                shop = escape_html(&record.shop),
                path = escape_html(&record_path),
                fields = maintenance_fields(Some(record)),
            );
        }
        body.push_str("</tbody>\n</table>\n");
    }

    let _ = write!(
        body,
        "<h2>Add maintenance record</h2>\n\
         <form method=\"post\" action=\"{}/maintenance\">{} <button type=\"submit\">Add</button></form>\n",
        escape_html(&base),
        maintenance_fields(None),
    );

    page(&name, &body)
}
