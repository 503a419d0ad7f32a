mod scene_dto;

pub use scene_dto::{
    LatLonDto, MapFigureDto, MarkerDto, OptionRowDto, OverlayDto, SceneDto, SearchRequestDto,
    SelectionRequestDto, TileLayerDto,
};
