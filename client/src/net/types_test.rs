use super::*;
use crate::state::session::Role;

#[test]
fn login_request_serializes_credentials() {
    let req = LoginRequest { username: "admin".to_owned(), password: "admin123".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "username": "admin", "password": "admin123" })
    );
}

#[test]
fn login_response_decodes_backend_payload() {
    let raw = serde_json::json!({
        "message": "Login successful",
        "user": {
            "id": 3,
            "username": "drsmith",
            "email": "smith@hospital.com",
            "role": "doctor",
            "full_name": "Dr. Smith",
            "phone": "555-0100",
            "is_active": true,
            "created_at": "2025-02-01T10:00:00"
        },
        "profile": { "specialization": "Cardiology" }
    });
    let resp: LoginResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(resp.user.role, Role::Doctor);
    assert_eq!(resp.user.full_name.as_deref(), Some("Dr. Smith"));
}

#[test]
fn doctor_summary_tolerates_null_columns() {
    let raw = serde_json::json!({
        "id": 1,
        "user_id": 4,
        "full_name": "Dr. Who",
        "specialization": "General",
        "department_name": null,
        "experience_years": null,
        "consultation_fee": 50.0
    });
    let doctor: DoctorSummary = serde_json::from_value(raw).unwrap();
    assert_eq!(
        doctor.cells(),
        ["Dr. Who", "General", "-", "-", "50.00"].map(str::to_owned).to_vec()
    );
}

#[test]
fn appointment_cells_follow_headers() {
    let raw = serde_json::json!({
        "id": 9,
        "patient_id": 2,
        "patient_name": "Pat",
        "doctor_id": 1,
        "doctor_name": "Dr. Who",
        "doctor_specialization": "General",
        "appointment_date": "2025-03-04",
        "appointment_time": "09:30",
        "status": "booked",
        "reason": "",
        "notes": null
    });
    let appt: AppointmentSummary = serde_json::from_value(raw).unwrap();
    let cells = appt.cells();
    assert_eq!(cells.len(), AppointmentSummary::HEADERS.len());
    assert_eq!(cells[0], "2025-03-04");
    assert_eq!(cells[5], "-");
}

#[test]
fn patient_cells_match_header_count() {
    let patient = PatientSummary {
        id: 1,
        full_name: "Pat".to_owned(),
        email: Some("pat@example.com".to_owned()),
        phone: None,
        gender: Some("F".to_owned()),
        blood_group: None,
    };
    assert_eq!(patient.cells().len(), PatientSummary::HEADERS.len());
    assert_eq!(patient.cells()[2], "-");
}
