pub mod form_dto;
