//! Built-in `collections` recipe.
//!
//! Gates every persistence path of `CollectionsProvider.tsx` behind the auth
//! provider's demo flag so demo sessions only touch in-memory state.

use super::BuiltinRule;

pub(super) const TARGET: &str = "app/components/CollectionsProvider.tsx";

pub(super) const DESCRIPTION: &str =
    "Route workspace, collection, request and history mutations to local state in demo mode.";

pub(super) const RULES: &[BuiltinRule] = &[
    BuiltinRule {
        name: "destructure-is-demo",
        description: Some("Pull the demo flag out of the auth hook."),
        anchor: r#"const { user } = useAuth();"#,
        replacement: r#"const { user, isDemo } = useAuth();"#,
    },
    BuiltinRule {
        name: "demo-workspaces-effect",
        description: Some("Seed a single in-memory workspace instead of subscribing."),
        anchor: r#"  // Load Workspaces on Login (Real-time Firestore Sync)
  useEffect(() => {
    if (!user) {
      setWorkspaces([]);
      setActiveWorkspaceId("default");
      return;
    }

    setLoading(true);"#,
        replacement: r#"  // Load Workspaces on Login (Real-time Firestore Sync)
  useEffect(() => {
    if (!user) {
      setWorkspaces([]);
      setActiveWorkspaceId("default");
      return;
    }

    if (isDemo) {
      setWorkspaces([{
        id: "demo-workspace",
        name: "Demo Workspace",
        ownerId: "demo-user",
        isOwner: true
      } as any]);
      setActiveWorkspaceId("demo-workspace");
      setLoading(false);
      return;
    }

    setLoading(true);"#,
    },
    BuiltinRule {
        name: "workspaces-effect-deps",
        description: Some("Re-run the workspace effect when the demo flag flips."),
        anchor: r#"  }, [user]);"#,
        replacement: r#"  }, [user, isDemo]);"#,
    },
    BuiltinRule {
        name: "demo-collections-effect",
        description: Some("Start with empty collections and history in demo mode."),
        anchor: r#"  // Load Collections when Workspace changes (Real-time Firestore Sync)
  useEffect(() => {
    if (!user || !activeWorkspaceId || activeWorkspaceId === "default") {
      setCollections([]);
      return;
    }

    setLoading(true);"#,
        replacement: r#"  // Load Collections when Workspace changes (Real-time Firestore Sync)
  useEffect(() => {
    if (!user || !activeWorkspaceId || activeWorkspaceId === "default") {
      setCollections([]);
      return;
    }

    if (isDemo) {
      setCollections([]);
      setHistory([]);
      setLoading(false);
      return;
    }

    setLoading(true);"#,
    },
    BuiltinRule {
        name: "collections-effect-deps",
        description: Some("Re-run the collection effect when the demo flag flips."),
        anchor: r#"  }, [user, activeWorkspaceId, updateSettings, settings.lastWorkspaceId]);"#,
        replacement: r#"  }, [user, isDemo, activeWorkspaceId, updateSettings, settings.lastWorkspaceId]);"#,
    },
    BuiltinRule {
        name: "demo-create-workspace",
        description: None,
        anchor: r#"  const createWorkspace = async (name: string) => {
    if (!user) return "";
    const id = `w_${Date.now()}`;

    try {"#,
        replacement: r#"  const createWorkspace = async (name: string) => {
    if (!user) return "";
    const id = `w_${Date.now()}`;

    if (isDemo) {
      setWorkspaces(prev => [...prev, { id, name, ownerId: "demo-user", isOwner: true } as any]);
      setActiveWorkspaceId(id);
      return id;
    }

    try {"#,
    },
    BuiltinRule {
        name: "demo-delete-workspace",
        description: None,
        anchor: r#"  const deleteWorkspace = async (id: string) => {
    if (currentRole === "read") return;
    try {"#,
        replacement: r#"  const deleteWorkspace = async (id: string) => {
    if (currentRole === "read") return;

    if (isDemo) {
      const remaining = workspaces.filter(w => w.id !== id);
      setWorkspaces(remaining);
      if (activeWorkspaceId === id) {
        setActiveWorkspaceId(remaining[0]?.id || "default");
      }
      return;
    }

    try {"#,
    },
    BuiltinRule {
        name: "demo-rename-workspace",
        description: None,
        anchor: r#"  const renameWorkspace = async (id: string, name: string) => {
    if (currentRole === "read") return;
    try {"#,
        replacement: r#"  const renameWorkspace = async (id: string, name: string) => {
    if (currentRole === "read") return;

    if (isDemo) {
      setWorkspaces(prev => prev.map(w => w.id === id ? { ...w, name } as any : w));
      return;
    }

    try {"#,
    },
    BuiltinRule {
        name: "demo-create-collection",
        description: None,
        anchor: r#"  const createCollection = async (name: string) => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return "";
    const id = `c_${Date.now()}`;

    try {"#,
        replacement: r#"  const createCollection = async (name: string) => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return "";
    const id = `c_${Date.now()}`;

    if (isDemo) {
      setCollections(prev => [...prev, { name, requests: [], id, createdAt: new Date() as any }]);
      return id;
    }

    try {"#,
    },
    BuiltinRule {
        name: "demo-save-request",
        description: None,
        anchor: r#"  const saveRequest = async (requestData: Omit<SavedRequest, 'id'>, collectionId: string) => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return;
    const id = `r_${Date.now()}`;
    const newRequest = { ...requestData, id };

    const targetCollection = collections.find(c => c.id === collectionId);
    if (!targetCollection) return;

    try {"#,
        replacement: r#"  const saveRequest = async (requestData: Omit<SavedRequest, 'id'>, collectionId: string) => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return;
    const id = `r_${Date.now()}`;
    const newRequest = { ...requestData, id };

    if (isDemo) {
      setCollections(prev => prev.map(c => 
        c.id === collectionId ? { ...c, requests: [...c.requests, newRequest] } : c
      ));
      return;
    }

    const targetCollection = collections.find(c => c.id === collectionId);
    if (!targetCollection) return;

    try {"#,
    },
    BuiltinRule {
        name: "demo-update-request",
        description: None,
        anchor: r#"  const updateRequest = async (request: SavedRequest, collectionId: string) => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return;
    const targetCollection = collections.find(c => c.id === collectionId);
    if (!targetCollection) return;

    const newRequests = targetCollection.requests.map(r => r.id === request.id ? request : r);
    try {"#,
        replacement: r#"  const updateRequest = async (request: SavedRequest, collectionId: string) => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return;

    if (isDemo) {
      setCollections(prev => prev.map(c => 
        c.id === collectionId ? { ...c, requests: c.requests.map(r => r.id === request.id ? request : r) } : c
      ));
      return;
    }

    const targetCollection = collections.find(c => c.id === collectionId);
    if (!targetCollection) return;

    const newRequests = targetCollection.requests.map(r => r.id === request.id ? request : r);
    try {"#,
    },
    BuiltinRule {
        name: "demo-delete-request",
        description: None,
        anchor: r#"  const deleteRequest = async (requestId: string, collectionId: string) => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return;
    const targetCollection = collections.find(c => c.id === collectionId);
    if (!targetCollection) return;

    const newRequests = targetCollection.requests.filter(r => r.id !== requestId);
    try {"#,
        replacement: r#"  const deleteRequest = async (requestId: string, collectionId: string) => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return;

    if (isDemo) {
      setCollections(prev => prev.map(c => 
        c.id === collectionId ? { ...c, requests: c.requests.filter(r => r.id !== requestId) } : c
      ));
      return;
    }

    const targetCollection = collections.find(c => c.id === collectionId);
    if (!targetCollection) return;

    const newRequests = targetCollection.requests.filter(r => r.id !== requestId);
    try {"#,
    },
    BuiltinRule {
        name: "demo-rename-request",
        description: None,
        anchor: r#"  const renameRequest = async (requestId: string, collectionId: string, newName: string) => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return;
    const targetCollection = collections.find(c => c.id === collectionId);
    if (!targetCollection) return;

    const newRequests = targetCollection.requests.map(r => r.id === requestId ? { ...r, name: newName } : r);
    try {"#,
        replacement: r#"  const renameRequest = async (requestId: string, collectionId: string, newName: string) => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return;

    if (isDemo) {
      setCollections(prev => prev.map(c => 
        c.id === collectionId ? { ...c, requests: c.requests.map(r => r.id === requestId ? { ...r, name: newName } : r) } : c
      ));
      return;
    }

    const targetCollection = collections.find(c => c.id === collectionId);
    if (!targetCollection) return;

    const newRequests = targetCollection.requests.map(r => r.id === requestId ? { ...r, name: newName } : r);
    try {"#,
    },
    BuiltinRule {
        name: "demo-delete-collection",
        description: None,
        anchor: r#"  const deleteCollection = async (collectionId: string) => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return;
    try {"#,
        replacement: r#"  const deleteCollection = async (collectionId: string) => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return;

    if (isDemo) {
      setCollections(prev => prev.filter(c => c.id !== collectionId));
      return;
    }

    try {"#,
    },
    BuiltinRule {
        name: "demo-rename-collection",
        description: None,
        anchor: r#"  const renameCollection = async (collectionId: string, newName: string) => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return;
    try {"#,
        replacement: r#"  const renameCollection = async (collectionId: string, newName: string) => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return;

    if (isDemo) {
      setCollections(prev => prev.map(c => c.id === collectionId ? { ...c, name: newName } : c));
      return;
    }

    try {"#,
    },
    BuiltinRule {
        name: "demo-add-history",
        description: Some("Keep the 50 most recent history items in memory."),
        anchor: r#"    // Firestore does not support undefined values
    if (newItem.error === undefined) {
      delete newItem.error;
    }

    try {"#,
        replacement: r#"    // Firestore does not support undefined values
    if (newItem.error === undefined) {
      delete newItem.error;
    }

    if (isDemo) {
      setHistory(prev => [newItem, ...prev].slice(0, 50));
      return;
    }

    try {"#,
    },
    BuiltinRule {
        name: "demo-clear-history",
        description: None,
        anchor: r#"  const clearHistory = async () => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return;
    try {"#,
        replacement: r#"  const clearHistory = async () => {
    if (!activeWorkspaceId || activeWorkspaceId === "default" || currentRole === "read") return;

    if (isDemo) {
      setHistory([]);
      return;
    }

    try {"#,
    },
];
