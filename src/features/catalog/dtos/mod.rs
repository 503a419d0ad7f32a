mod option_dto;

pub use option_dto::OptionResponseDto;
