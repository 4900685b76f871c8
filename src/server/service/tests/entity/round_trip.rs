use chrono::NaiveDate;
use serde_json::Value;

use crate::{
    model::{
        audit::ChangeLogDto,
        organization::{CenterDto, RegionalDto, SedeDto, UserSedeDto},
        process::{
            AprendizProcessInstructorDto, ConceptDto, EnterpriseDto, ProcessDto,
            RegisterySofiaDto, StateDto, TypeModalityDto, VerificationDto,
        },
        security::{
            FormDto, FormModuleDto, ModuleDto, PersonDto, RolDto, RolFormDto, UserDto, UserRolDto,
        },
        training::{
            AprendizDto, AprendizProgramDto, InstructorDto, InstructorProgramDto, ProgramDto,
        },
    },
    server::resource::{
        audit::ChangeLog,
        organization::{Center, Regional, Sede, UserSede},
        process::{
            AprendizProcessInstructor, Concept, Enterprise, Process, RegisterySofia, State,
            TypeModality, Verification,
        },
        security::{Form, FormModule, Module, Person, Rol, RolForm, User, UserRol},
        training::{Aprendiz, AprendizProgram, Instructor, InstructorProgram, Program},
        Resource, Updatable,
    },
};

use super::*;

/// Client fields of a DTO as they travel on the wire, without the store-assigned id.
fn client_fields<R: Resource>(dto: &R::Dto) -> Value {
    let mut value = serde_json::to_value(dto).unwrap();
    if let Some(fields) = value.as_object_mut() {
        fields.remove("Id");
    }

    value
}

/// Inserts `dto` and expects both the returned and the re-read row to carry every client field.
async fn creates<R: Resource>(test: &TestContext, dto: R::Dto) -> i32 {
    let service = EntityService::<R>::new(&test.db);
    let expected = client_fields::<R>(&dto);

    let created = service.create(dto).await.unwrap();
    let id = R::id(&created);
    assert!(id > 0, "{} got no id", R::NAME);
    assert_eq!(client_fields::<R>(&created), expected, "{} create", R::NAME);

    let fetched = service.get_by_id(id).await.unwrap();
    assert_eq!(client_fields::<R>(&fetched), expected, "{} read", R::NAME);

    id
}

/// Creates `dto`, replaces it with `replacement` and expects the stored row to match each one.
async fn round_trips<R: Updatable>(test: &TestContext, dto: R::Dto, replacement: R::Dto) -> i32 {
    let id = creates::<R>(test, dto).await;

    let service = EntityService::<R>::new(&test.db);
    let expected = client_fields::<R>(&replacement);
    assert!(matches!(service.update(id, replacement).await, Ok(true)));

    let fetched = service.get_by_id(id).await.unwrap();
    assert_eq!(client_fields::<R>(&fetched), expected, "{} replace", R::NAME);

    id
}

/// Expect every security resource to keep its client fields through create, read and replace
#[tokio::test]
async fn security_resources_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let person_id = round_trips::<Person>(
        &test,
        PersonDto {
            id: 0,
            first_name: "Laura".to_string(),
            second_name: Some("Maria".to_string()),
            first_last_name: "Gomez".to_string(),
            second_last_name: Some("Rios".to_string()),
            phone_number: "3001234567".to_string(),
            email: "laura.gomez@sena.edu.co".to_string(),
            type_identification: "CC".to_string(),
            number_identification: "1020304050".to_string(),
            signing: Some("firma.png".to_string()),
            active: Some(true),
        },
        PersonDto {
            id: 0,
            first_name: "Laura".to_string(),
            second_name: None,
            first_last_name: "Gomez".to_string(),
            second_last_name: None,
            phone_number: "3109876543".to_string(),
            email: "lgomez@sena.edu.co".to_string(),
            type_identification: "CE".to_string(),
            number_identification: "99887766".to_string(),
            signing: None,
            active: Some(false),
        },
    )
    .await;

    let user_id = round_trips::<User>(
        &test,
        UserDto {
            id: 0,
            username: "lgomez".to_string(),
            email: "lgomez@sena.edu.co".to_string(),
            password: "secret".to_string(),
            person_id,
            active: Some(true),
        },
        UserDto {
            id: 0,
            username: "laura.gomez".to_string(),
            email: "laura.gomez@sena.edu.co".to_string(),
            password: "changed".to_string(),
            person_id,
            active: Some(true),
        },
    )
    .await;

    let rol_id = round_trips::<Rol>(
        &test,
        RolDto {
            id: 0,
            type_rol: "Instructor".to_string(),
            description: "Dicta formacion".to_string(),
            active: Some(true),
        },
        RolDto {
            id: 0,
            type_rol: "Coordinador".to_string(),
            description: "Coordina instructores".to_string(),
            active: Some(false),
        },
    )
    .await;

    round_trips::<UserRol>(
        &test,
        UserRolDto {
            id: 0,
            user_id,
            rol_id,
            active: Some(true),
        },
        UserRolDto {
            id: 0,
            user_id,
            rol_id,
            active: Some(false),
        },
    )
    .await;

    let form_id = round_trips::<Form>(
        &test,
        FormDto {
            id: 0,
            name: "Seguimiento".to_string(),
            description: "Bitacora quincenal".to_string(),
            cuestion: "Actividades realizadas".to_string(),
            type_cuestion: "Abierta".to_string(),
            answer: "Pendiente".to_string(),
            active: Some(true),
        },
        FormDto {
            id: 0,
            name: "Evaluacion".to_string(),
            description: "Evaluacion final".to_string(),
            cuestion: "Resultado".to_string(),
            type_cuestion: "Cerrada".to_string(),
            answer: "Aprobado".to_string(),
            active: Some(true),
        },
    )
    .await;

    round_trips::<RolForm>(
        &test,
        RolFormDto {
            id: 0,
            permission: "Lectura".to_string(),
            rol_id,
            form_id,
        },
        RolFormDto {
            id: 0,
            permission: "Escritura".to_string(),
            rol_id,
            form_id,
        },
    )
    .await;

    let module_id = round_trips::<Module>(
        &test,
        ModuleDto {
            id: 0,
            name: "Etapa productiva".to_string(),
            description: "Seguimiento de aprendices".to_string(),
            active: Some(true),
        },
        ModuleDto {
            id: 0,
            name: "Etapa lectiva".to_string(),
            description: String::new(),
            active: Some(false),
        },
    )
    .await;

    round_trips::<FormModule>(
        &test,
        FormModuleDto {
            id: 0,
            status_procedure: "Abierto".to_string(),
            form_id,
            module_id,
        },
        FormModuleDto {
            id: 0,
            status_procedure: "Cerrado".to_string(),
            form_id,
            module_id,
        },
    )
    .await;

    Ok(())
}

/// Expect every organization resource to keep its client fields through create, read and replace
#[tokio::test]
async fn organization_resources_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (user, _) = test.security().insert_user_with_person(1).await?;

    let regional_id = round_trips::<Regional>(
        &test,
        RegionalDto {
            id: 0,
            name: "Antioquia".to_string(),
            code_regional: "05".to_string(),
            description: "Regional Antioquia".to_string(),
            address: "Calle 51 57-70".to_string(),
            active: Some(true),
        },
        RegionalDto {
            id: 0,
            name: "Huila".to_string(),
            code_regional: "41".to_string(),
            description: String::new(),
            address: "Carrera 5 5-01".to_string(),
            active: Some(false),
        },
    )
    .await;

    let center_id = round_trips::<Center>(
        &test,
        CenterDto {
            id: 0,
            name: "Centro Minero".to_string(),
            code_center: "9120".to_string(),
            address: "Km 5 via Sogamoso".to_string(),
            regional_id,
            active: Some(true),
        },
        CenterDto {
            id: 0,
            name: "Centro Agroempresarial".to_string(),
            code_center: "9121".to_string(),
            address: "Km 1 via Neiva".to_string(),
            regional_id,
            active: Some(true),
        },
    )
    .await;

    let sede_id = round_trips::<Sede>(
        &test,
        SedeDto {
            id: 0,
            name: "Sede Norte".to_string(),
            code_sede: "9120-1".to_string(),
            address: "Calle 10 4-20".to_string(),
            phone_sede: "6087654321".to_string(),
            email_contact: "norte@sena.edu.co".to_string(),
            center_id,
            active: Some(true),
        },
        SedeDto {
            id: 0,
            name: "Sede Sur".to_string(),
            code_sede: "9120-2".to_string(),
            address: "Carrera 3 1-15".to_string(),
            phone_sede: "6081234567".to_string(),
            email_contact: "sur@sena.edu.co".to_string(),
            center_id,
            active: Some(false),
        },
    )
    .await;

    round_trips::<UserSede>(
        &test,
        UserSedeDto {
            id: 0,
            status_procedure: "Asignado".to_string(),
            user_id: user.id,
            sede_id,
        },
        UserSedeDto {
            id: 0,
            status_procedure: "Trasladado".to_string(),
            user_id: user.id,
            sede_id,
        },
    )
    .await;

    Ok(())
}

/// Expect every training resource to keep its client fields through create, read and replace
#[tokio::test]
async fn training_resources_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (user, _) = test.security().insert_user_with_person(1).await?;

    let program_id = round_trips::<Program>(
        &test,
        ProgramDto {
            id: 0,
            code_program: 228_106,
            name: "Analisis y Desarrollo de Software".to_string(),
            type_program: "Tecnologo".to_string(),
            description: "Programa de software".to_string(),
            active: Some(true),
        },
        ProgramDto {
            id: 0,
            code_program: 9_000_000_001,
            name: "Gestion Empresarial".to_string(),
            type_program: "Tecnico".to_string(),
            description: String::new(),
            active: Some(false),
        },
    )
    .await;

    let aprendiz_id = round_trips::<Aprendiz>(
        &test,
        AprendizDto {
            id: 0,
            previous_program: "Ninguno".to_string(),
            user_id: user.id,
            active: Some(true),
        },
        AprendizDto {
            id: 0,
            previous_program: "Tecnico en sistemas".to_string(),
            user_id: user.id,
            active: Some(true),
        },
    )
    .await;

    let instructor_id = round_trips::<Instructor>(
        &test,
        InstructorDto {
            id: 0,
            user_id: user.id,
            active: Some(true),
        },
        InstructorDto {
            id: 0,
            user_id: user.id,
            active: Some(false),
        },
    )
    .await;

    round_trips::<AprendizProgram>(
        &test,
        AprendizProgramDto {
            id: 0,
            aprendiz_id,
            program_id,
        },
        AprendizProgramDto {
            id: 0,
            aprendiz_id,
            program_id,
        },
    )
    .await;

    round_trips::<InstructorProgram>(
        &test,
        InstructorProgramDto {
            id: 0,
            instructor_id,
            program_id,
        },
        InstructorProgramDto {
            id: 0,
            instructor_id,
            program_id,
        },
    )
    .await;

    Ok(())
}

/// Expect every process resource to keep its client fields through create, read and replace
#[tokio::test]
async fn process_resources_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let (user, _) = test.security().insert_user_with_person(1).await?;
    let aprendiz = test.training().insert_aprendiz(user.id).await?;
    let instructor = test.training().insert_instructor(user.id).await?;

    let start = NaiveDate::from_ymd_opt(2025, 2, 3)
        .and_then(|date| date.and_hms_opt(8, 0, 0))
        .unwrap();
    let process_id = round_trips::<Process>(
        &test,
        ProcessDto {
            id: 0,
            type_process: "Etapa productiva".to_string(),
            start_aprendiz: Some(start),
            observation: "Inicio en febrero".to_string(),
            active: Some(true),
        },
        ProcessDto {
            id: 0,
            type_process: "Etapa lectiva".to_string(),
            start_aprendiz: None,
            observation: String::new(),
            active: Some(true),
        },
    )
    .await;

    let type_modality_id = round_trips::<TypeModality>(
        &test,
        TypeModalityDto {
            id: 0,
            name: "Contrato de aprendizaje".to_string(),
            description: "Vinculo laboral".to_string(),
            active: Some(true),
        },
        TypeModalityDto {
            id: 0,
            name: "Pasantia".to_string(),
            description: String::new(),
            active: Some(false),
        },
    )
    .await;

    let registery_sofia_id = round_trips::<RegisterySofia>(
        &test,
        RegisterySofiaDto {
            id: 0,
            name: "Registro inicial".to_string(),
            description: "Alta en SOFIA Plus".to_string(),
            document: "acta-001.pdf".to_string(),
            active: Some(true),
        },
        RegisterySofiaDto {
            id: 0,
            name: "Registro final".to_string(),
            description: "Cierre en SOFIA Plus".to_string(),
            document: "acta-002.pdf".to_string(),
            active: Some(true),
        },
    )
    .await;

    let concept_id = round_trips::<Concept>(
        &test,
        ConceptDto {
            id: 0,
            name: "Aprobado".to_string(),
            observation: "Cumple".to_string(),
            active: Some(true),
        },
        ConceptDto {
            id: 0,
            name: "Aplazado".to_string(),
            observation: "Falta bitacora".to_string(),
            active: Some(false),
        },
    )
    .await;

    let enterprise_id = round_trips::<Enterprise>(
        &test,
        EnterpriseDto {
            id: 0,
            name_enterprise: "Ecopetrol".to_string(),
            nit_enterprise: "899999068".to_string(),
            locate: "Bogota".to_string(),
            phone_enterprise: "6012345000".to_string(),
            email_enterprise: "practicas@ecopetrol.com.co".to_string(),
            observation: "Convenio vigente".to_string(),
            active: Some(true),
        },
        EnterpriseDto {
            id: 0,
            name_enterprise: "Argos".to_string(),
            nit_enterprise: "890100251".to_string(),
            locate: "Medellin".to_string(),
            phone_enterprise: "6043198400".to_string(),
            email_enterprise: "talento@argos.com.co".to_string(),
            observation: String::new(),
            active: Some(true),
        },
    )
    .await;

    let state_id = round_trips::<State>(
        &test,
        StateDto {
            id: 0,
            type_state: "En curso".to_string(),
            description: "Proceso abierto".to_string(),
            active: Some(true),
        },
        StateDto {
            id: 0,
            type_state: "Finalizado".to_string(),
            description: "Proceso cerrado".to_string(),
            active: Some(true),
        },
    )
    .await;

    let verification_id = round_trips::<Verification>(
        &test,
        VerificationDto {
            id: 0,
            name: "Visita".to_string(),
            observation: "Visita a la empresa".to_string(),
            active: Some(true),
        },
        VerificationDto {
            id: 0,
            name: "Llamada".to_string(),
            observation: String::new(),
            active: Some(false),
        },
    )
    .await;

    let case = AprendizProcessInstructorDto {
        id: 0,
        aprendiz_id: aprendiz.id,
        instructor_id: instructor.id,
        process_id,
        type_modality_id,
        registery_sofia_id,
        concept_id,
        enterprise_id,
        state_id,
        verification_id,
    };
    round_trips::<AprendizProcessInstructor>(&test, case.clone(), case).await;

    Ok(())
}

/// Expect change log entries to keep every client field through create and read
#[tokio::test]
async fn change_log_round_trips() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    creates::<ChangeLog>(
        &test,
        ChangeLogDto {
            id: 0,
            table_name: "Rol".to_string(),
            id_table: 4,
            old_values: "{\"TypeRol\":\"Admin\"}".to_string(),
            new_values: "{\"TypeRol\":\"Administrador\"}".to_string(),
            action: "UPDATE".to_string(),
            user_name: "lgomez".to_string(),
            active: Some(true),
        },
    )
    .await;

    Ok(())
}
