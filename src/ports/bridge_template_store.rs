/// Port for the bridge file shipped with dashdesk.
pub trait BridgeTemplateStore {
    /// Unsubstituted bridge template content.
    fn bridge_template(&self) -> String;
}
